//! Foundation types for the storefront product carousel.
//!
//! - [`DragState`]: pointer drag bookkeeping for one track
//! - [`ScrollTrack`]: what the rendering layer must provide
//! - [`PointerEvent`] / [`EventDisposition`]: input in, outcome out
//! - [`gesture_constants`]: tuning values shared by the carousel

pub mod drag_state;
pub mod gesture_constants;
pub mod pointer;
pub mod scroll_track;
pub mod velocity;

pub use drag_state::DragState;
pub use pointer::{EventDisposition, PointerEvent, PointerEventKind};
pub use scroll_track::{card_step_delta, ScrollDirection, ScrollTrack};
pub use velocity::backward_difference;
