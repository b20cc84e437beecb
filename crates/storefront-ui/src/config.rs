//! Per-carousel tuning.

use storefront_animation::MomentumDecay;
use storefront_foundation::gesture_constants::{
    CARD_GAP, DRAG_GAIN, MOMENTUM_DECAY, MOMENTUM_VELOCITY_THRESHOLD,
};

/// Tuning for one carousel instance. `Default` matches the gesture constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Scroll pixels per pointer pixel while dragging.
    pub drag_gain: f32,
    /// Gap between cards, added to the card width for button steps.
    pub card_gap: f32,
    /// Post-release momentum law.
    pub momentum: MomentumDecay,
}

impl CarouselConfig {
    pub fn with_drag_gain(mut self, drag_gain: f32) -> Self {
        self.drag_gain = drag_gain;
        self
    }

    pub fn with_card_gap(mut self, card_gap: f32) -> Self {
        self.card_gap = card_gap;
        self
    }

    pub fn with_momentum(mut self, momentum: MomentumDecay) -> Self {
        self.momentum = momentum;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_gain: DRAG_GAIN,
            card_gap: CARD_GAP,
            momentum: MomentumDecay::new(MOMENTUM_DECAY, MOMENTUM_VELOCITY_THRESHOLD),
        }
    }
}
