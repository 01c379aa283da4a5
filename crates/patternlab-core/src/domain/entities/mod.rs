pub mod display_board;
pub mod gate;
pub mod layout;
pub mod lot;
pub mod rate;
pub mod spot;
pub mod ticket;
pub mod vehicle;

pub use display_board::DisplayBoard;
pub use gate::{Entrance, Exit};
pub use layout::{LotLayout, SpotSpec};
pub use lot::ParkingLot;
pub use rate::{MAX_BILLABLE_HOURS, ParkingRate, billable_hours, hours_between};
pub use spot::ParkingSpot;
pub use ticket::{CARD_THRESHOLD, Payment, Ticket};
pub use vehicle::Vehicle;
