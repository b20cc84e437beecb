//! Shared gesture constants for the product carousel.
//!
//! Values are in logical pixels and display frames. Momentum is stepped once
//! per display refresh, so its wall-clock length depends on the refresh rate.

use web_time::Duration;

/// Multiplier from pointer travel to scroll travel during a drag.
///
/// Above 1.0 so the track moves further than the pointer, giving a looser
/// feel than a 1:1 drag.
pub const DRAG_GAIN: f32 = 1.4;

/// Fraction of momentum speed kept from one frame to the next.
pub const MOMENTUM_DECAY: f32 = 0.96;

/// Momentum speed in px/frame at or below which the glide stops.
pub const MOMENTUM_VELOCITY_THRESHOLD: f32 = 0.4;

/// Horizontal gap between adjacent cards, added to a card's width when
/// stepping by one card.
pub const CARD_GAP: f32 = 16.0;

/// Length of an eased step scroll when the host has no native smooth scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(300);
