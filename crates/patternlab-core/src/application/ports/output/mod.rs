//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `patternlab-adapters` crate provides implementations.

use chrono::{DateTime, Utc};

use crate::domain::{LotLayout, Payment};
use crate::error::LabResult;

/// Port for reading the current time.
///
/// Implemented by:
/// - `patternlab_adapters::clock::SystemClock` (production)
/// - `patternlab_adapters::clock::ManualClock` (demos and tests)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Port for taking a payment.
///
/// Implemented by:
/// - `patternlab_adapters::payment::InstantGateway` (always completes)
/// - `patternlab_adapters::payment::RecordingGateway` (keeps a history)
#[cfg_attr(test, mockall::automock)]
pub trait PaymentGateway: Send + Sync {
    /// Process `payment`, marking it completed on success.
    ///
    /// A gateway that returns an error must leave the payment pending.
    fn process(&self, payment: &mut Payment) -> LabResult<()>;
}

/// Port for producing a lot layout.
///
/// Implemented by:
/// - `patternlab_adapters::layout::BuiltinLayout` (compiled-in demo lot)
/// - `patternlab_adapters::layout::TomlLayoutFile` (user layouts)
#[cfg_attr(test, mockall::automock)]
pub trait LayoutSource: Send + Sync {
    /// Load the layout. Validation happens when the lot is built.
    fn load(&self) -> LabResult<LotLayout>;

    /// Short human-readable name for logs and errors.
    fn describe(&self) -> String;
}
