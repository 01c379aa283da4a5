use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::vehicle::Vehicle;
use crate::domain::{
    error::DomainError,
    value_objects::{Money, PaymentMethod, PaymentStatus, SpotId, TicketId, TicketStatus},
};

/// Fees strictly above this amount are charged to a card; the rest is cash.
pub const CARD_THRESHOLD: Money = Money::from_dollars(10);

/// A payment taken at an exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub amount: Money,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// A pending payment for `amount`, with the method chosen by amount.
    pub fn for_fee(amount: Money, at: DateTime<Utc>) -> Self {
        let method = if amount > CARD_THRESHOLD {
            PaymentMethod::CreditCard
        } else {
            PaymentMethod::Cash
        };

        Self {
            id: Uuid::new_v4(),
            amount,
            method,
            status: PaymentStatus::Pending,
            created_at: at,
        }
    }

    pub fn complete(&mut self) {
        self.status = PaymentStatus::Completed;
    }

    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}

/// One parking session, from entry to payment.
///
/// Created at entry with status `Issued`; closed once at exit, which stamps
/// the exit time, fee and payment and moves it to `Paid`. Tickets are kept
/// by the lot after payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    spot: SpotId,
    vehicle: Vehicle,
    entry_time: DateTime<Utc>,
    exit_time: Option<DateTime<Utc>>,
    fee: Money,
    status: TicketStatus,
    payment: Option<Payment>,
}

impl Ticket {
    pub(crate) fn issue(id: TicketId, spot: SpotId, vehicle: Vehicle, at: DateTime<Utc>) -> Self {
        Self {
            id,
            spot,
            vehicle,
            entry_time: at,
            exit_time: None,
            fee: Money::ZERO,
            status: TicketStatus::Issued,
            payment: None,
        }
    }

    pub const fn id(&self) -> TicketId {
        self.id
    }

    pub const fn spot(&self) -> SpotId {
        self.spot
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub const fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    pub const fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.exit_time
    }

    pub const fn fee(&self) -> Money {
        self.fee
    }

    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn payment(&self) -> Option<&Payment> {
        self.payment.as_ref()
    }

    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }

    /// Time parked up to `now` (or up to the recorded exit once paid).
    pub fn parked_for(&self, now: DateTime<Utc>) -> Duration {
        self.exit_time.unwrap_or(now) - self.entry_time
    }

    /// Close the session: `Issued → Paid`.
    pub(crate) fn settle(
        &mut self,
        exit_time: DateTime<Utc>,
        fee: Money,
        payment: Payment,
    ) -> Result<(), DomainError> {
        if self.is_paid() {
            return Err(DomainError::TicketAlreadyPaid { ticket: self.id.0 });
        }

        self.exit_time = Some(exit_time);
        self.fee = fee;
        self.payment = Some(payment);
        self.status = TicketStatus::Paid;
        Ok(())
    }
}
