//! Storefront home page interaction layer.
//!
//! The featured collection carousel is driven by [`CarouselController`]:
//! pointer drags scroll the track with amplified travel, releases glide on
//! with per-frame decaying momentum, and the arrow buttons step one card at a
//! time. [`TickerAnimation`] rotates the announcement bar.

pub mod carousel;
pub mod config;
pub mod momentum;
pub mod smooth_scroll;
pub mod ticker;
pub mod track;

pub use carousel::CarouselController;
pub use config::CarouselConfig;
pub use momentum::MomentumAnimation;
pub use smooth_scroll::SmoothScrollAnimation;
pub use ticker::{TickerAnimation, TickerError, TickerState};
pub use track::CarouselTrack;

pub use storefront_foundation::{EventDisposition, PointerEvent, ScrollDirection, ScrollTrack};
