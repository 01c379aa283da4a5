//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `patternlab-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Clock`: Current time for ticket stamps
//!   - `PaymentGateway`: Takes payment at an exit
//!   - `LayoutSource`: Supplies the lot layout
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Clock, LayoutSource, PaymentGateway};

#[cfg(test)]
pub use output::{MockClock, MockLayoutSource, MockPaymentGateway};
