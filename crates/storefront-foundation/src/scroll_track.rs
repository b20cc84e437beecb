//! Contract the rendering layer provides for a horizontally scrolling track.

/// Direction for a one-card step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// Sign applied to a step distance.
    pub fn sign(self) -> f32 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }
}

/// A scrollable container holding carousel cards.
///
/// Methods take `&self`; implementations hold their offset in interior
/// mutable cells so the track can be shared between pointer handlers and
/// frame callbacks on the same thread.
pub trait ScrollTrack {
    /// Current horizontal scroll offset in pixels.
    fn scroll_offset(&self) -> f32;

    /// Writes a new scroll offset. Implementations may clamp it to their
    /// scrollable range, so callers read the offset back afterwards. A direct
    /// write also ends any eased scroll in flight.
    fn set_scroll_offset(&self, offset: f32);

    /// Requests an eased scroll by `delta` pixels.
    fn smooth_scroll_by(&self, delta: f32);

    /// Stops an in-flight eased scroll where it is. Tracks whose smooth
    /// scrolling cannot be interrupted keep the default no-op.
    fn stop_smooth_scroll(&self) {}

    /// Pixel width of the first rendered card, if any card is rendered.
    fn reference_item_width(&self) -> Option<f32>;
}

/// Signed distance for a one-card step: the card width plus the gap.
pub fn card_step_delta(direction: ScrollDirection, card_width: f32, gap: f32) -> f32 {
    direction.sign() * (card_width + gap)
}
