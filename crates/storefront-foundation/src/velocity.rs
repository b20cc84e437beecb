//! Scroll velocity estimation during a drag.
//!
//! The estimate is a single-sample backward difference of the track offset,
//! taken once per move event. No smoothing window is applied, so jittery
//! input produces a jittery release velocity.

/// Velocity in px per move sample between two consecutive offsets.
#[inline]
pub fn backward_difference(previous_offset: f32, current_offset: f32) -> f32 {
    current_offset - previous_offset
}
