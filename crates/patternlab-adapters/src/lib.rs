//! Infrastructure adapters for patternlab.
//!
//! This crate implements the ports defined in `patternlab-core::application::ports`.
//! It contains the system clock, payment gateways and layout loading.

pub mod clock;
pub mod layout;
pub mod payment;

// Re-export commonly used adapters
pub use clock::{ManualClock, SystemClock};
pub use layout::{BuiltinLayout, TomlLayoutFile};
pub use payment::{InstantGateway, RecordingGateway};
