// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for patternlab.
//!
//! This module contains pure logic: the sorting strategies and the parking
//! lot model. Time, payments and layout storage are reached through ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, clock or logging calls
//! - **Few crates**: std plus thiserror, serde, chrono types and uuid
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod sorting;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    CARD_THRESHOLD, DisplayBoard, Entrance, Exit, LotLayout, MAX_BILLABLE_HOURS, ParkingLot,
    ParkingRate, ParkingSpot, Payment, SpotSpec, Ticket, Vehicle, billable_hours, hours_between,
};

pub use error::{DomainError, ErrorCategory};

pub use sorting::{
    BubbleSort, MergeSort, QuickSort, SortStats, SortStrategy, SortingContext, partition,
    strategy_for,
};

pub use value_objects::{
    GateId, Money, PaymentMethod, PaymentStatus, SortAlgorithm, SpotId, SpotKind, TicketId,
    TicketStatus, VehicleKind,
};
