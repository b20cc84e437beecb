//! Animation math for the storefront carousel.
//!
//! Nothing in this crate schedules frames. It only answers "what happens on
//! the next frame" so drivers in `storefront-ui` can stay thin.

mod momentum_decay;
mod tween;

pub use momentum_decay::{FrameDecaySpec, MomentumDecay, MomentumStep};
pub use tween::{Easing, Tween};
