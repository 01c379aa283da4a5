//! The tiered hourly rate schedule.
//!
//! | Hour        | Charge |
//! |-------------|--------|
//! | 1st         | $4.00  |
//! | 2nd and 3rd | $3.50  |
//! | each after  | $2.50  |
//!
//! Parked time is rounded up to the next whole hour before charging.

use chrono::Duration;

use crate::domain::{error::DomainError, value_objects::Money};

const FIRST_HOUR: Money = Money::from_cents(400);
const SECOND_THIRD_HOUR: Money = Money::from_cents(350);
const LATER_HOUR: Money = Money::from_cents(250);

const MILLIS_PER_HOUR: u64 = 3_600_000;

/// Longest stay `calculate` will price, in hours (a little over a century).
pub const MAX_BILLABLE_HOURS: u64 = 1_000_000;

/// The lot's fixed four-tier rate schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParkingRate;

impl ParkingRate {
    /// Fee for `hours` parked, rounded up to whole hours.
    ///
    /// Zero hours costs nothing. Negative, non-finite and absurdly long
    /// stays (over [`MAX_BILLABLE_HOURS`]) are rejected.
    pub fn calculate(&self, hours: f64) -> Result<Money, DomainError> {
        Ok(self.for_whole_hours(self.billable(hours)?))
    }

    /// Whole hours charged for `hours` parked.
    pub fn billable(&self, hours: f64) -> Result<u64, DomainError> {
        if !hours.is_finite() || hours < 0.0 || hours > MAX_BILLABLE_HOURS as f64 {
            return Err(DomainError::InvalidDuration { hours });
        }
        Ok(hours.ceil() as u64)
    }

    /// Fee for a parked duration. Negative durations are treated as zero.
    pub fn calculate_duration(&self, parked: Duration) -> Money {
        self.for_whole_hours(billable_hours(parked))
    }

    /// Fee for an already-rounded number of hours.
    pub fn for_whole_hours(&self, hours: u64) -> Money {
        let mut fee = Money::ZERO;
        if hours >= 1 {
            fee += FIRST_HOUR;
        }
        fee += SECOND_THIRD_HOUR * hours.saturating_sub(1).min(2);
        fee += LATER_HOUR * hours.saturating_sub(3);
        fee
    }
}

/// Whole hours billed for `parked`, rounding any started hour up.
pub fn billable_hours(parked: Duration) -> u64 {
    let millis = parked.num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis as u64).div_ceil(MILLIS_PER_HOUR)
}

/// Parked time as fractional hours, for display.
pub fn hours_between(parked: Duration) -> f64 {
    parked.num_milliseconds() as f64 / MILLIS_PER_HOUR as f64
}
