//! Eased offset animation for hosts without native smooth scrolling.

use std::cell::RefCell;
use std::rc::Rc;
use storefront_animation::{Easing, Tween};
use storefront_core::{FrameCallbackRegistration, FrameClock};
use web_time::Duration;

type ApplyFn = Rc<dyn Fn(f32)>;

struct SmoothRun {
    from: f32,
    to: f32,
    /// Created on the first frame so timing starts from a real frame time.
    tween: Option<Tween>,
    last_frame_nanos: Option<u64>,
    apply: ApplyFn,
    registration: Option<FrameCallbackRegistration>,
}

fn schedule_next_frame(
    state: Rc<RefCell<Option<SmoothRun>>>,
    frame_clock: FrameClock,
    duration_nanos: u64,
    easing: Easing,
) {
    let state_for_closure = Rc::clone(&state);
    let frame_clock_for_closure = frame_clock.clone();

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let (value, done, apply) = {
            let mut guard = state_for_closure.borrow_mut();
            let Some(run) = guard.as_mut() else {
                return;
            };
            let (from, to) = (run.from, run.to);
            let tween = *run
                .tween
                .get_or_insert_with(|| Tween::new(from, to, frame_time_nanos, duration_nanos, easing));
            run.last_frame_nanos = Some(frame_time_nanos);
            (
                tween.sample(frame_time_nanos),
                tween.is_done(frame_time_nanos),
                Rc::clone(&run.apply),
            )
        };

        apply(value);

        if done {
            log::trace!("smooth scroll settled at {value}");
            *state_for_closure.borrow_mut() = None;
        } else {
            schedule_next_frame(
                state_for_closure,
                frame_clock_for_closure,
                duration_nanos,
                easing,
            );
        }
    });

    if let Some(run) = state.borrow_mut().as_mut() {
        run.registration = Some(registration);
    }
}

/// Animates an offset towards a target over a fixed duration.
///
/// A request made while animating retargets from the current position, so
/// repeated button presses continue smoothly instead of jumping.
pub struct SmoothScrollAnimation {
    state: Rc<RefCell<Option<SmoothRun>>>,
    frame_clock: FrameClock,
    duration_nanos: u64,
    easing: Easing,
}

impl SmoothScrollAnimation {
    pub fn new(frame_clock: FrameClock, duration: Duration, easing: Easing) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            frame_clock,
            duration_nanos: u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX),
            easing,
        }
    }

    /// Animates from `current_offset` to `current_offset + delta`, calling
    /// `apply` with each frame's offset.
    pub fn animate_by<F>(&self, current_offset: f32, delta: f32, apply: F)
    where
        F: Fn(f32) + 'static,
    {
        let target = current_offset + delta;
        let apply: ApplyFn = Rc::new(apply);
        let mut guard = self.state.borrow_mut();

        if let Some(run) = guard.as_mut() {
            match run.last_frame_nanos.filter(|_| run.tween.is_some()) {
                Some(now) => {
                    if let Some(tween) = run.tween.as_mut() {
                        tween.retarget(now, target, self.duration_nanos);
                    }
                }
                None => run.from = current_offset,
            }
            run.to = target;
            run.apply = apply;
            log::trace!("smooth scroll retargeted to {target}");
            return;
        }

        *guard = Some(SmoothRun {
            from: current_offset,
            to: target,
            tween: None,
            last_frame_nanos: None,
            apply,
            registration: None,
        });
        drop(guard);

        log::trace!("smooth scroll {current_offset} -> {target}");
        schedule_next_frame(
            Rc::clone(&self.state),
            self.frame_clock.clone(),
            self.duration_nanos,
            self.easing,
        );
    }

    pub fn cancel(&self) {
        let run = self.state.borrow_mut().take();
        if let Some(registration) = run.and_then(|run| run.registration) {
            registration.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Offset the running animation is heading to.
    pub fn target(&self) -> Option<f32> {
        self.state.borrow().as_ref().map(|run| run.to)
    }
}

impl Drop for SmoothScrollAnimation {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for SmoothScrollAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmoothScrollAnimation")
            .field("running", &self.is_running())
            .field("target", &self.target())
            .field("duration_nanos", &self.duration_nanos)
            .field("easing", &self.easing)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use storefront_core::{FrameScheduler, FRAME_INTERVAL_NANOS};

    fn sink(offset: &Rc<Cell<f32>>) -> impl Fn(f32) + 'static {
        let offset = Rc::clone(offset);
        move |value| offset.set(value)
    }

    #[test]
    fn test_animates_to_target_and_stops() {
        let scheduler = FrameScheduler::new();
        let smooth = SmoothScrollAnimation::new(
            scheduler.frame_clock(),
            Duration::from_millis(100),
            Easing::EaseInOut,
        );
        let offset = Rc::new(Cell::new(0.0));

        smooth.animate_by(0.0, 276.0, sink(&offset));
        assert_eq!(smooth.target(), Some(276.0));

        let mut frame = 0;
        while scheduler.has_frame_callbacks() && frame < 100 {
            frame += 1;
            scheduler.drain_frame_callbacks(frame * FRAME_INTERVAL_NANOS);
            assert!(offset.get() >= 0.0 && offset.get() <= 276.0);
        }

        assert_eq!(offset.get(), 276.0);
        assert!(!smooth.is_running());
        // 100ms at 60Hz plus the starting frame.
        assert!(frame <= 8, "took {frame} frames");
    }

    #[test]
    fn test_second_request_retargets() {
        let scheduler = FrameScheduler::new();
        let smooth = SmoothScrollAnimation::new(
            scheduler.frame_clock(),
            Duration::from_millis(100),
            Easing::Linear,
        );
        let offset = Rc::new(Cell::new(0.0));

        smooth.animate_by(0.0, 100.0, sink(&offset));
        scheduler.drain_frame_callbacks(FRAME_INTERVAL_NANOS);
        scheduler.drain_frame_callbacks(2 * FRAME_INTERVAL_NANOS);
        let mid = offset.get();
        assert!(mid > 0.0 && mid < 100.0);

        smooth.animate_by(mid, 100.0, sink(&offset));
        assert_eq!(smooth.target(), Some(mid + 100.0));
        assert_eq!(scheduler.pending_frame_callbacks(), 1);

        let mut frame = 2;
        while scheduler.has_frame_callbacks() && frame < 100 {
            frame += 1;
            scheduler.drain_frame_callbacks(frame * FRAME_INTERVAL_NANOS);
        }
        assert!((offset.get() - (mid + 100.0)).abs() < 1e-3);
    }

    #[test]
    fn test_cancel_freezes_offset() {
        let scheduler = FrameScheduler::new();
        let smooth = SmoothScrollAnimation::new(
            scheduler.frame_clock(),
            Duration::from_millis(300),
            Easing::EaseInOut,
        );
        let offset = Rc::new(Cell::new(50.0));

        smooth.animate_by(50.0, -200.0, sink(&offset));
        smooth.cancel();
        smooth.cancel();
        scheduler.drain_frame_callbacks(FRAME_INTERVAL_NANOS);

        assert_eq!(offset.get(), 50.0);
        assert!(!smooth.is_running());
    }
}
