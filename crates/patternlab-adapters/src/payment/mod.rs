//! Payment gateway adapters.

mod instant;
mod recording;

pub use instant::InstantGateway;
pub use recording::RecordingGateway;
