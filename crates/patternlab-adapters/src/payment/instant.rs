//! Gateway that accepts every payment.

use patternlab_core::{
    application::ports::PaymentGateway, domain::Payment, error::LabResult,
};
use tracing::info;

/// Completes every payment immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantGateway;

impl InstantGateway {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentGateway for InstantGateway {
    fn process(&self, payment: &mut Payment) -> LabResult<()> {
        payment.complete();
        info!(
            id = %payment.id,
            amount = %payment.amount,
            method = %payment.method,
            "Payment completed"
        );
        Ok(())
    }
}
