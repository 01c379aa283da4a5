//! Gateway that keeps every processed payment.

use std::sync::{Arc, RwLock};

use patternlab_core::{
    application::{ApplicationError, ports::PaymentGateway},
    domain::{Money, Payment},
    error::LabResult,
};
use tracing::debug;

/// Completes payments and records them for later inspection.
///
/// Clones share one history.
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    inner: Arc<RwLock<Vec<Payment>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// All payments processed so far, oldest first.
    pub fn payments(&self) -> LabResult<Vec<Payment>> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        Ok(inner.clone())
    }

    /// Sum of all processed payments.
    pub fn total(&self) -> LabResult<Money> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        Ok(inner.iter().fold(Money::ZERO, |acc, p| acc + p.amount))
    }
}

impl PaymentGateway for RecordingGateway {
    fn process(&self, payment: &mut Payment) -> LabResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        payment.complete();
        debug!(id = %payment.id, amount = %payment.amount, "Payment recorded");
        inner.push(payment.clone());
        Ok(())
    }
}

fn lock_error() -> ApplicationError {
    ApplicationError::StateLockError {
        name: "payment history",
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use patternlab_core::domain::{PaymentMethod, PaymentStatus};

    use super::*;

    #[test]
    fn records_completed_payments() {
        let gateway = RecordingGateway::new();
        let handle = gateway.clone();

        let mut small = Payment::for_fee(Money::from_cents(750), Utc::now());
        let mut large = Payment::for_fee(Money::from_cents(1600), Utc::now());
        gateway.process(&mut small).unwrap();
        gateway.process(&mut large).unwrap();

        let history = handle.payments().unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|p| p.status == PaymentStatus::Completed));
        assert_eq!(history[0].method, PaymentMethod::Cash);
        assert_eq!(history[1].method, PaymentMethod::CreditCard);
        assert_eq!(handle.total().unwrap().to_string(), "$23.50");
    }
}
