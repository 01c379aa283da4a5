// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can record and re-raise them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("No sorting strategy set")]
    NoSortingStrategy,

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Unknown sorting algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown vehicle kind: {0}")]
    UnknownVehicleKind(String),

    #[error("Unknown spot kind: {0}")]
    UnknownSpotKind(String),

    #[error("Invalid parked duration: {hours} hours")]
    InvalidDuration { hours: f64 },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    // ========================================================================
    // State Errors (409-level equivalent)
    // ========================================================================
    #[error("Ticket {ticket} is already paid")]
    TicketAlreadyPaid { ticket: u64 },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Ticket {0} not found")]
    TicketNotFound(u64),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoSortingStrategy => vec![
                "Set an algorithm before sorting".into(),
                "Available algorithms: bubble, merge, quick".into(),
            ],
            Self::UnknownAlgorithm(name) => vec![
                format!("'{}' is not a known sorting algorithm", name),
                "Available algorithms: bubble, merge, quick".into(),
            ],
            Self::UnknownVehicleKind(_) => {
                vec!["Vehicle kinds: car, van, truck, motorcycle".into()]
            }
            Self::UnknownSpotKind(_) => {
                vec!["Spot kinds: handicapped, compact, large, motorcycle".into()]
            }
            Self::InvalidDuration { .. } => {
                vec![format!(
                    "Parked hours must be finite, non-negative and at most {}",
                    crate::domain::entities::rate::MAX_BILLABLE_HOURS
                )]
            }
            Self::InvalidLayout(msg) => vec![
                format!("Layout problem: {}", msg),
                "Try: patternlab lot show to inspect the built-in layout".into(),
            ],
            Self::TicketAlreadyPaid { ticket } => vec![
                format!("Ticket {} has already been settled at an exit", ticket),
                "Each ticket can only be paid once".into(),
            ],
            Self::TicketNotFound(id) => vec![
                format!("No ticket with number {} was issued by this lot", id),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoSortingStrategy => ErrorCategory::Configuration,
            Self::UnknownAlgorithm(_)
            | Self::UnknownVehicleKind(_)
            | Self::UnknownSpotKind(_)
            | Self::InvalidDuration { .. }
            | Self::InvalidLayout(_) => ErrorCategory::Validation,
            Self::TicketAlreadyPaid { .. } => ErrorCategory::State,
            Self::TicketNotFound(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    State,
    NotFound,
}
