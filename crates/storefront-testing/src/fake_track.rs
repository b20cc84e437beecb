//! Recording [`ScrollTrack`] double.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use storefront_foundation::ScrollTrack;

/// Track that records every offset write and smooth-scroll request.
///
/// Unbounded by default; [`set_bounds`](Self::set_bounds) makes it clamp like
/// a real scroll container. Smooth-scroll requests are only recorded, not
/// animated.
#[derive(Debug, Default)]
pub struct FakeTrack {
    offset: Cell<f32>,
    bounds: Cell<Option<(f32, f32)>>,
    card_width: Cell<Option<f32>>,
    writes: RefCell<Vec<f32>>,
    smooth_requests: RefCell<Vec<f32>>,
}

impl FakeTrack {
    pub fn new(offset: f32) -> Rc<Self> {
        Rc::new(Self {
            offset: Cell::new(offset),
            ..Self::default()
        })
    }

    pub fn with_card_width(offset: f32, card_width: f32) -> Rc<Self> {
        let track = Self::new(offset);
        track.set_card_width(Some(card_width));
        track
    }

    pub fn set_card_width(&self, width: Option<f32>) {
        self.card_width.set(width);
    }

    pub fn set_bounds(&self, min: f32, max: f32) {
        self.bounds.set(Some((min, max)));
    }

    /// Every offset passed to `set_scroll_offset`, after clamping.
    pub fn writes(&self) -> Vec<f32> {
        self.writes.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn smooth_requests(&self) -> Vec<f32> {
        self.smooth_requests.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.writes.borrow_mut().clear();
        self.smooth_requests.borrow_mut().clear();
    }
}

impl ScrollTrack for FakeTrack {
    fn scroll_offset(&self) -> f32 {
        self.offset.get()
    }

    fn set_scroll_offset(&self, offset: f32) {
        let offset = match self.bounds.get() {
            Some((min, max)) => offset.clamp(min, max),
            None => offset,
        };
        self.offset.set(offset);
        self.writes.borrow_mut().push(offset);
    }

    fn smooth_scroll_by(&self, delta: f32) {
        self.smooth_requests.borrow_mut().push(delta);
    }

    fn reference_item_width(&self) -> Option<f32> {
        self.card_width.get()
    }
}
