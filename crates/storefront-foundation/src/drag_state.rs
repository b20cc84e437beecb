//! Drag-to-scroll gesture state for one carousel instance.

use crate::velocity::backward_difference;

/// Pointer drag state of a carousel track.
///
/// `velocity` is updated on every move while dragging and is only meant to be
/// read for momentum once the drag has ended.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    is_dragging: bool,
    start_x: f32,
    scroll_left_at_start: f32,
    velocity: f32,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn start_x(&self) -> f32 {
        self.start_x
    }

    pub fn scroll_left_at_start(&self) -> f32 {
        self.scroll_left_at_start
    }

    /// Signed px-per-sample velocity.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Starts a drag at `pointer_x` with the track at `scroll_offset`.
    pub fn begin(&mut self, pointer_x: f32, scroll_offset: f32) {
        self.is_dragging = true;
        self.start_x = pointer_x;
        self.scroll_left_at_start = scroll_offset;
        self.velocity = 0.0;
        log::trace!("drag begin x={pointer_x} offset={scroll_offset}");
    }

    /// Scroll offset the track should move to for a pointer at `pointer_x`.
    ///
    /// Returns `None` outside a drag.
    pub fn target_offset(&self, pointer_x: f32, drag_gain: f32) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        let walk = (pointer_x - self.start_x) * drag_gain;
        Some(self.scroll_left_at_start - walk)
    }

    /// Records the offset change applied by one move.
    pub fn record_scroll(&mut self, previous_offset: f32, current_offset: f32) {
        if self.is_dragging {
            self.velocity = backward_difference(previous_offset, current_offset);
        }
    }

    /// Ends the drag and hands back the release velocity.
    ///
    /// Returns `None` when no drag was active.
    pub fn end(&mut self) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        self.is_dragging = false;
        log::trace!("drag end velocity={}", self.velocity);
        Some(self.velocity)
    }

    /// Forgets any drag, e.g. when the track unmounts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
