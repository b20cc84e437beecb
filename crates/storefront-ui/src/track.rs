//! Ready-made [`ScrollTrack`] for hosts that keep the offset themselves.

use crate::smooth_scroll::SmoothScrollAnimation;
use std::cell::Cell;
use std::rc::{Rc, Weak};
use storefront_animation::Easing;
use storefront_core::FrameClock;
use storefront_foundation::gesture_constants::SMOOTH_SCROLL_DURATION;
use storefront_foundation::ScrollTrack;

/// Horizontal track with a clamped offset and eased stepping.
///
/// The offset stays within `[0, max_offset]`, where `max_offset` is the
/// content width minus the viewport width. Layout updates the extents and
/// card width through the setters.
pub struct CarouselTrack {
    offset: Cell<f32>,
    max_offset: Cell<f32>,
    card_width: Cell<Option<f32>>,
    smooth: SmoothScrollAnimation,
    this: Weak<CarouselTrack>,
}

impl CarouselTrack {
    pub fn new(frame_clock: FrameClock) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            offset: Cell::new(0.0),
            max_offset: Cell::new(0.0),
            card_width: Cell::new(None),
            smooth: SmoothScrollAnimation::new(
                frame_clock,
                SMOOTH_SCROLL_DURATION,
                Easing::EaseInOut,
            ),
            this: this.clone(),
        })
    }

    /// Updates the scrollable range from measured widths and re-clamps.
    pub fn set_extents(&self, content_width: f32, viewport_width: f32) {
        self.max_offset.set((content_width - viewport_width).max(0.0));
        self.offset.set(self.clamp(self.offset.get()));
    }

    /// Records the width of the first rendered card, or `None` when empty.
    pub fn set_card_width(&self, width: Option<f32>) {
        self.card_width.set(width);
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset.get()
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth.is_running()
    }

    /// Writes a clamped offset without touching the eased scroll.
    fn apply_offset(&self, offset: f32) {
        self.offset.set(self.clamp(offset));
    }

    fn clamp(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return self.offset.get();
        }
        offset.clamp(0.0, self.max_offset.get())
    }
}

impl ScrollTrack for CarouselTrack {
    fn scroll_offset(&self) -> f32 {
        self.offset.get()
    }

    fn set_scroll_offset(&self, offset: f32) {
        self.smooth.cancel();
        self.apply_offset(offset);
    }

    fn smooth_scroll_by(&self, delta: f32) {
        // Aim inside the scrollable range so every eased frame is visible.
        let current = self.offset.get();
        let delta = self.clamp(current + delta) - current;
        let this = self.this.clone();
        self.smooth.animate_by(current, delta, move |value| {
            if let Some(track) = this.upgrade() {
                track.apply_offset(value);
            }
        });
    }

    fn stop_smooth_scroll(&self) {
        self.smooth.cancel();
    }

    fn reference_item_width(&self) -> Option<f32> {
        self.card_width.get()
    }
}

impl std::fmt::Debug for CarouselTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselTrack")
            .field("offset", &self.offset.get())
            .field("max_offset", &self.max_offset.get())
            .field("card_width", &self.card_width.get())
            .field("smooth", &self.smooth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{FrameScheduler, FRAME_INTERVAL_NANOS};

    #[test]
    fn test_offset_is_clamped_to_extents() {
        let scheduler = FrameScheduler::new();
        let track = CarouselTrack::new(scheduler.frame_clock());
        track.set_extents(2_000.0, 800.0);

        track.set_scroll_offset(-50.0);
        assert_eq!(track.scroll_offset(), 0.0);
        track.set_scroll_offset(5_000.0);
        assert_eq!(track.scroll_offset(), 1_200.0);

        track.set_extents(1_000.0, 800.0);
        assert_eq!(track.scroll_offset(), 200.0);
    }

    #[test]
    fn test_content_narrower_than_viewport_cannot_scroll() {
        let scheduler = FrameScheduler::new();
        let track = CarouselTrack::new(scheduler.frame_clock());
        track.set_extents(300.0, 800.0);

        track.set_scroll_offset(100.0);
        assert_eq!(track.max_offset(), 0.0);
        assert_eq!(track.scroll_offset(), 0.0);
    }

    #[test]
    fn test_smooth_scroll_by_reaches_target() {
        let scheduler = FrameScheduler::new();
        let track = CarouselTrack::new(scheduler.frame_clock());
        track.set_extents(4_000.0, 800.0);
        track.set_scroll_offset(100.0);

        track.smooth_scroll_by(356.0);
        assert!(track.is_smooth_scrolling());

        let mut frame = 0;
        while scheduler.has_frame_callbacks() && frame < 120 {
            frame += 1;
            scheduler.drain_frame_callbacks(frame * FRAME_INTERVAL_NANOS);
        }

        assert!(!track.is_smooth_scrolling());
        assert!((track.scroll_offset() - 456.0).abs() < 1e-3);
    }

    #[test]
    fn test_direct_write_stops_smooth_scroll() {
        let scheduler = FrameScheduler::new();
        let track = CarouselTrack::new(scheduler.frame_clock());
        track.set_extents(4_000.0, 800.0);

        track.smooth_scroll_by(356.0);
        scheduler.drain_frame_callbacks(FRAME_INTERVAL_NANOS);
        scheduler.drain_frame_callbacks(2 * FRAME_INTERVAL_NANOS);
        track.set_scroll_offset(20.0);

        assert!(!track.is_smooth_scrolling());
        assert!(!scheduler.has_frame_callbacks());
        scheduler.drain_frame_callbacks(3 * FRAME_INTERVAL_NANOS);
        assert_eq!(track.scroll_offset(), 20.0);
    }

    #[test]
    fn test_steps_near_the_end_stay_in_range() {
        let scheduler = FrameScheduler::new();
        let track = CarouselTrack::new(scheduler.frame_clock());
        track.set_extents(2_000.0, 800.0);
        track.set_scroll_offset(1_000.0);

        track.smooth_scroll_by(356.0);
        scheduler.drain_frame_callbacks(FRAME_INTERVAL_NANOS);
        scheduler.drain_frame_callbacks(2 * FRAME_INTERVAL_NANOS);
        track.smooth_scroll_by(356.0);

        let mut offsets = Vec::new();
        let mut frame = 2;
        while scheduler.has_frame_callbacks() && frame < 120 {
            frame += 1;
            scheduler.drain_frame_callbacks(frame * FRAME_INTERVAL_NANOS);
            offsets.push(track.scroll_offset());
        }

        // Only the final frame reaches the end of the range.
        let (last, moving) = offsets.split_last().expect("animated frames");
        assert_eq!(*last, 1_200.0);
        assert!(moving.iter().all(|offset| *offset < 1_200.0));
        assert!(moving.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
