//! Utility functions and helpers for the signbridge service.
//!
//! # Submodules
//!
//! - `clock`: Injectable time source used for cache expiry and timestamps.
//! - `logging`: Tracing initialization and secret scrubbing.

pub mod clock;
pub mod logging;

pub use clock::{Clock, ManualClock, SystemClock};
