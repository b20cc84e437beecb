//! Core runtime pieces shared by the storefront UI crates.
//!
//! Everything here is single-threaded and cooperative: pointer handlers and
//! frame callbacks run on one thread, one after another, never concurrently.

mod frame_clock;
mod scheduler;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use scheduler::{FrameScheduler, SchedulerHandle};

pub type FrameCallbackId = u64;

/// Duration of one frame at the 60 Hz reference refresh rate.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
