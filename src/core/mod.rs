//! Shared infrastructure: injected clock and application path resolution.

pub mod clock;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
