//! patternlab Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for patternlab:
//! interchangeable sorting strategies and a parking lot allocator, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         patternlab-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ParkingService, SortService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Clock, PaymentGateway, Layout) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   patternlab-adapters (Infrastructure)  │
//! │ (SystemClock, InstantGateway, TOML etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (SortingContext, ParkingLot, Ticket)    │
//! │          No I/O, No Logging             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use patternlab_core::prelude::*;
//!
//! // 1. Sort with a chosen strategy
//! let mut values = vec![5, 3, 9, 1];
//! let ctx = SortingContext::with_algorithm(SortAlgorithm::Merge);
//! ctx.sort(&mut values).unwrap();
//!
//! // 2. Run a lot through the service (with injected adapters)
//! let mut service = ParkingService::new(lot, clock, gateway);
//! let ticket = service.enter(GateId(1), Vehicle::car("KA-01-HH-1234")).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ParkingService, SortService,
        ports::{Clock, LayoutSource, PaymentGateway},
    };
    pub use crate::domain::{
        GateId, LotLayout, Money, ParkingLot, ParkingRate, ParkingSpot, Payment, SortAlgorithm,
        SortStats, SortStrategy, SortingContext, SpotId, SpotKind, Ticket, TicketId, Vehicle,
        VehicleKind,
    };
    pub use crate::error::{LabError, LabResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
