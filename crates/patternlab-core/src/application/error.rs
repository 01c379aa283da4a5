//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Which kind of gate a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    Entrance,
    Exit,
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entrance => f.write_str("entrance"),
            Self::Exit => f.write_str("exit"),
        }
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A gate id that the lot never registered.
    #[error("Unknown {kind} {id}")]
    UnknownGate { kind: GateKind, id: u32 },

    /// The payment gateway refused or could not process a payment.
    #[error("Payment failed: {reason}")]
    PaymentFailed { reason: String },

    /// A layout could not be read or parsed.
    #[error("Layout unavailable from {source_name}: {reason}")]
    LayoutUnavailable { source_name: String, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned: {name}")]
    StateLockError { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownGate { kind, id } => vec![
                format!("This lot has no {} with id {}", kind, id),
                "Try: patternlab lot show to list the lot's gates".into(),
            ],
            Self::PaymentFailed { reason } => vec![
                format!("The payment was not taken: {}", reason),
                "The vehicle is still parked; try the exit again".into(),
            ],
            Self::LayoutUnavailable { source_name, .. } => vec![
                format!("Could not load a layout from {}", source_name),
                "Check the file exists and is valid TOML".into(),
                "Omit --layout to use the built-in layout".into(),
            ],
            Self::StateLockError { .. } => vec![
                "Shared state is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownGate { .. } => ErrorCategory::NotFound,
            Self::PaymentFailed { .. } => ErrorCategory::State,
            Self::LayoutUnavailable { .. } => ErrorCategory::Configuration,
            Self::StateLockError { .. } => ErrorCategory::Internal,
        }
    }
}
