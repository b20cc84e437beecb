/// Easing curves for timed offset animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Smoothstep; slow start and finish, like browser smooth scrolling.
    #[default]
    EaseInOut,
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress.
    pub fn transform(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
            Easing::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// Time-based interpolation between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start_nanos: u64,
    duration_nanos: u64,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_nanos: u64, duration_nanos: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_nanos,
            duration_nanos: duration_nanos.max(1),
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_done(&self, now_nanos: u64) -> bool {
        now_nanos.saturating_sub(self.start_nanos) >= self.duration_nanos
    }

    pub fn sample(&self, now_nanos: u64) -> f32 {
        let elapsed = now_nanos.saturating_sub(self.start_nanos);
        let t = elapsed as f32 / self.duration_nanos as f32;
        self.from + (self.to - self.from) * self.easing.transform(t)
    }

    /// Restarts from wherever the tween currently is, heading to `new_to`.
    pub fn retarget(&mut self, now_nanos: u64, new_to: f32, duration_nanos: u64) {
        let current = self.sample(now_nanos);
        *self = Self::new(current, new_to, now_nanos, duration_nanos, self.easing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut, Easing::EaseOutCubic] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
            assert_eq!(easing.transform(2.0), 1.0);
        }
        assert!((Easing::EaseInOut.transform(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sample_reaches_target_when_done() {
        let tween = Tween::new(10.0, 110.0, 1_000, 300_000_000, Easing::EaseInOut);

        assert_eq!(tween.sample(1_000), 10.0);
        assert!(!tween.is_done(150_000_000));
        assert!(tween.is_done(300_001_000));
        assert_eq!(tween.sample(400_000_000), 110.0);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut tween = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
        tween.retarget(50, 0.0, 100);

        assert_eq!(tween.sample(50), 50.0);
        assert_eq!(tween.target(), 0.0);
        assert_eq!(tween.sample(150), 0.0);
    }

    #[test]
    fn test_zero_duration_is_immediately_done() {
        let tween = Tween::new(0.0, 5.0, 10, 0, Easing::Linear);
        assert!(tween.is_done(11));
        assert_eq!(tween.sample(11), 5.0);
    }
}
