//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "take a vehicle in" or "sort these values".

pub mod parking_service;
pub mod sort_service;

pub use parking_service::ParkingService;
pub use sort_service::SortService;
