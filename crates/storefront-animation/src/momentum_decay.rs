//! Per-frame geometric decay used for post-release momentum.
//!
//! Velocity is measured in pixels per frame, not per second. Each frame the
//! offset advances by the current velocity, then the velocity is multiplied by
//! the decay factor. Because the law is expressed per frame, the glide lasts
//! longer in wall-clock time on a 60 Hz display than on a 120 Hz one.

/// Default fraction of speed kept from one frame to the next.
pub const DEFAULT_DECAY_FACTOR: f32 = 0.96;

/// Default speed (px/frame) at or below which momentum stops.
pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 0.4;

/// Upper bound on the decay factor; at 1.0 the glide would never end.
const MAX_DECAY_FACTOR: f32 = 0.999;

/// Hard cap on simulated frames for diagnostics.
const MAX_SIMULATED_FRAMES: u32 = 100_000;

/// Specification of a frame-stepped decay animation.
pub trait FrameDecaySpec {
    /// Speed at or below which the animation is finished.
    fn abs_velocity_threshold(&self) -> f32;

    /// Velocity for the frame after one carrying `velocity`.
    fn next_velocity(&self, velocity: f32) -> f32;

    fn is_at_rest(&self, velocity: f32) -> bool {
        !velocity.is_finite() || velocity.abs() <= self.abs_velocity_threshold()
    }
}

/// Result of advancing momentum by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumStep {
    /// Scroll offset after applying this frame's velocity.
    pub offset: f32,
    /// Velocity carried into the next frame.
    pub velocity: f32,
    /// Whether another frame should be scheduled.
    pub should_continue: bool,
}

/// Exponential per-frame momentum decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumDecay {
    decay_factor: f32,
    abs_velocity_threshold: f32,
}

impl MomentumDecay {
    /// Creates a decay spec. The factor is clamped into `[0, 0.999]` so the
    /// glide always terminates.
    pub fn new(decay_factor: f32, abs_velocity_threshold: f32) -> Self {
        Self {
            decay_factor: decay_factor.clamp(0.0, MAX_DECAY_FACTOR),
            abs_velocity_threshold: abs_velocity_threshold.abs(),
        }
    }

    pub fn decay_factor(&self) -> f32 {
        self.decay_factor
    }

    /// Applies one frame: `offset += velocity`, then `velocity *= decay`.
    pub fn step(&self, offset: f32, velocity: f32) -> MomentumStep {
        let offset = offset + velocity;
        let velocity = self.next_velocity(velocity);
        MomentumStep {
            offset,
            velocity,
            should_continue: !self.is_at_rest(velocity),
        }
    }

    /// Number of frames a release at `initial_velocity` will animate.
    ///
    /// Zero when the release is already at rest.
    pub fn frames_to_rest(&self, initial_velocity: f32) -> u32 {
        self.simulate(initial_velocity).0
    }

    /// Total offset change a release at `initial_velocity` will produce.
    pub fn glide_distance(&self, initial_velocity: f32) -> f32 {
        self.simulate(initial_velocity).1
    }

    fn simulate(&self, initial_velocity: f32) -> (u32, f32) {
        if self.is_at_rest(initial_velocity) {
            return (0, 0.0);
        }
        let mut frames = 0;
        let mut offset = 0.0;
        let mut velocity = initial_velocity;
        loop {
            let step = self.step(offset, velocity);
            frames += 1;
            offset = step.offset;
            velocity = step.velocity;
            if !step.should_continue || frames >= MAX_SIMULATED_FRAMES {
                return (frames, offset);
            }
        }
    }
}

impl Default for MomentumDecay {
    fn default() -> Self {
        Self::new(DEFAULT_DECAY_FACTOR, DEFAULT_VELOCITY_THRESHOLD)
    }
}

impl FrameDecaySpec for MomentumDecay {
    fn abs_velocity_threshold(&self) -> f32 {
        self.abs_velocity_threshold
    }

    fn next_velocity(&self, velocity: f32) -> f32 {
        velocity * self.decay_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_applies_velocity_then_decays() {
        let decay = MomentumDecay::default();
        let step = decay.step(100.0, 10.0);

        assert_eq!(step.offset, 110.0);
        assert!((step.velocity - 9.6).abs() < 1e-5);
        assert!(step.should_continue);
    }

    #[test]
    fn test_step_stops_at_threshold() {
        let decay = MomentumDecay::default();
        // 0.41 * 0.96 = 0.3936, under the threshold.
        let step = decay.step(0.0, 0.41);
        assert!(!step.should_continue);
    }

    #[test]
    fn test_release_of_twenty_rests_after_ninety_six_frames() {
        let decay = MomentumDecay::default();
        let expected = ((0.4f64 / 20.0).ln() / 0.96f64.ln()).ceil() as u32;

        assert_eq!(expected, 96);
        assert_eq!(decay.frames_to_rest(20.0), expected);
        assert_eq!(decay.frames_to_rest(-20.0), expected);
    }

    #[test]
    fn test_at_rest_velocities_animate_zero_frames() {
        let decay = MomentumDecay::default();
        for velocity in [0.0, 0.4, -0.4, 0.2] {
            assert_eq!(decay.frames_to_rest(velocity), 0);
            assert_eq!(decay.glide_distance(velocity), 0.0);
        }
    }

    #[test]
    fn test_non_finite_velocity_is_at_rest() {
        let decay = MomentumDecay::default();
        assert!(decay.is_at_rest(f32::NAN));
        assert!(decay.is_at_rest(f32::INFINITY));
        assert_eq!(decay.frames_to_rest(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn test_large_velocity_still_terminates() {
        let decay = MomentumDecay::default();
        let frames = decay.frames_to_rest(1.0e30);
        assert!(frames > 96);
        assert!(frames < MAX_SIMULATED_FRAMES);
    }

    #[test]
    fn test_glide_distance_follows_direction() {
        let decay = MomentumDecay::default();
        let forward = decay.glide_distance(20.0);
        let backward = decay.glide_distance(-20.0);

        // Geometric series bound: v0 / (1 - r).
        assert!(forward > 0.0 && forward < 20.0 / 0.04);
        assert!((forward + backward).abs() < 1e-3);
    }

    #[test]
    fn test_decay_factor_is_clamped() {
        let decay = MomentumDecay::new(1.5, -0.4);
        assert_eq!(decay.decay_factor(), MAX_DECAY_FACTOR);
        assert_eq!(decay.abs_velocity_threshold(), 0.4);
    }
}
