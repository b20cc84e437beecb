//! Deterministic display refresh for tests.

use std::cell::Cell;
use storefront_core::{FrameClock, FrameScheduler, FRAME_INTERVAL_NANOS};

/// Owns a [`FrameScheduler`] and drains it at a fixed refresh interval.
#[derive(Debug)]
pub struct TestFrameDriver {
    scheduler: FrameScheduler,
    now_nanos: Cell<u64>,
    interval_nanos: u64,
}

impl TestFrameDriver {
    /// 60 Hz driver starting at time zero.
    pub fn new() -> Self {
        Self::with_interval(FRAME_INTERVAL_NANOS)
    }

    pub fn with_refresh_rate(hz: u32) -> Self {
        Self::with_interval(1_000_000_000 / u64::from(hz.max(1)))
    }

    fn with_interval(interval_nanos: u64) -> Self {
        Self {
            scheduler: FrameScheduler::new(),
            now_nanos: Cell::new(0),
            interval_nanos,
        }
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.scheduler.frame_clock()
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos.get()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.scheduler.has_frame_callbacks()
    }

    /// Moves time forward one refresh and drains. Returns callbacks run.
    pub fn advance_frame(&self) -> usize {
        let now = self.now_nanos.get() + self.interval_nanos;
        self.now_nanos.set(now);
        self.scheduler.drain_frame_callbacks(now)
    }

    pub fn advance_frames(&self, frames: u32) {
        for _ in 0..frames {
            self.advance_frame();
        }
    }

    /// Advances until nothing is queued or `max_frames` have passed.
    /// Returns the number of frames advanced.
    pub fn run_until_idle(&self, max_frames: u32) -> u32 {
        let mut frames = 0;
        while self.has_pending_frame() && frames < max_frames {
            self.advance_frame();
            frames += 1;
        }
        frames
    }
}

impl Default for TestFrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
