//! Momentum (inertia) driver for a released carousel drag.
//!
//! IDLE until [`MomentumAnimation::start`] receives a release velocity above
//! the rest threshold; RUNNING while a frame callback is queued. Each frame
//! applies the current velocity as a scroll delta and decays it by the
//! [`MomentumDecay`] law.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use storefront_animation::{FrameDecaySpec, MomentumDecay};
use storefront_core::{FrameCallbackRegistration, FrameClock};

type ScrollFn = Rc<dyn Fn(f32) -> bool>;

/// State of an in-flight glide.
struct MomentumRun {
    /// Identifies the run so a callback from an older run never touches a
    /// newer one.
    generation: u64,
    /// Velocity to apply on the next frame, px/frame.
    velocity: f32,
    /// Frames applied so far, including the one applied at release.
    frames: u32,
    /// Pending frame request; dropping it cancels the request.
    registration: Option<FrameCallbackRegistration>,
}

fn schedule_next_frame(
    state: Rc<RefCell<Option<MomentumRun>>>,
    frame_clock: FrameClock,
    spec: MomentumDecay,
    generation: u64,
    on_scroll: ScrollFn,
) {
    let state_for_closure = Rc::clone(&state);
    let frame_clock_for_closure = frame_clock.clone();

    let registration = frame_clock.with_frame_nanos(move |_frame_time_nanos| {
        let velocity = match state_for_closure.borrow().as_ref() {
            Some(run) if run.generation == generation => run.velocity,
            _ => return,
        };

        let applied = on_scroll(velocity);
        let next_velocity = spec.next_velocity(velocity);
        let should_continue = applied && !spec.is_at_rest(next_velocity);

        {
            let mut guard = state_for_closure.borrow_mut();
            let frames = match guard.as_mut() {
                Some(run) if run.generation == generation => {
                    run.velocity = next_velocity;
                    run.frames += 1;
                    run.frames
                }
                _ => return,
            };
            if !should_continue {
                log::debug!(
                    "momentum finished after {frames} frames (track attached: {applied})"
                );
                *guard = None;
                return;
            }
        }

        schedule_next_frame(
            state_for_closure,
            frame_clock_for_closure,
            spec,
            generation,
            on_scroll,
        );
    });

    let scheduled = registration.id().is_some();
    let mut guard = state.borrow_mut();
    if !guard
        .as_ref()
        .is_some_and(|run| run.generation == generation)
    {
        return;
    }
    if !scheduled {
        log::debug!("momentum dropped: frame scheduler is gone");
        *guard = None;
    } else if let Some(run) = guard.as_mut() {
        run.registration = Some(registration);
    }
}

/// Drives momentum scrolling for one carousel.
///
/// At most one frame callback is pending at any time. Starting a new glide or
/// calling [`cancel`](Self::cancel) discards the previous one before it can
/// scroll again.
pub struct MomentumAnimation {
    state: Rc<RefCell<Option<MomentumRun>>>,
    next_generation: Cell<u64>,
    frame_clock: FrameClock,
    spec: MomentumDecay,
}

impl MomentumAnimation {
    pub fn new(frame_clock: FrameClock, spec: MomentumDecay) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            next_generation: Cell::new(1),
            frame_clock,
            spec,
        }
    }

    pub fn spec(&self) -> MomentumDecay {
        self.spec
    }

    /// Starts a glide at `velocity` px/frame.
    ///
    /// `on_scroll` receives each frame's scroll delta and returns `false` when
    /// the delta could not be applied (e.g. the track is gone), which ends the
    /// glide. The first frame is applied synchronously; the rest follow on
    /// subsequent display refreshes.
    ///
    /// Returns `true` if any frame was applied. A release at or below the rest
    /// threshold applies nothing.
    pub fn start<F>(&self, velocity: f32, on_scroll: F) -> bool
    where
        F: Fn(f32) -> bool + 'static,
    {
        self.cancel();

        if self.spec.is_at_rest(velocity) {
            log::trace!("momentum skipped: release velocity {velocity} at rest");
            return false;
        }

        if !on_scroll(velocity) {
            return false;
        }
        let next_velocity = self.spec.next_velocity(velocity);
        if self.spec.is_at_rest(next_velocity) {
            log::debug!("momentum finished after 1 frame");
            return true;
        }

        let generation = self.next_generation.get();
        self.next_generation.set(generation + 1);
        log::debug!("momentum start velocity={velocity} generation={generation}");

        *self.state.borrow_mut() = Some(MomentumRun {
            generation,
            velocity: next_velocity,
            frames: 1,
            registration: None,
        });

        schedule_next_frame(
            Rc::clone(&self.state),
            self.frame_clock.clone(),
            self.spec,
            generation,
            Rc::new(on_scroll),
        );
        true
    }

    /// Stops any running glide. Harmless when idle or called repeatedly.
    pub fn cancel(&self) {
        let run = self.state.borrow_mut().take();
        if let Some(run) = run {
            log::debug!(
                "momentum cancelled after {} frames at velocity {}",
                run.frames,
                run.velocity
            );
            if let Some(registration) = run.registration {
                registration.cancel();
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Velocity the next frame will apply, while running.
    pub fn velocity(&self) -> Option<f32> {
        self.state.borrow().as_ref().map(|run| run.velocity)
    }

    /// Frames applied by the current glide, while running.
    pub fn frames_applied(&self) -> Option<u32> {
        self.state.borrow().as_ref().map(|run| run.frames)
    }
}

impl Drop for MomentumAnimation {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for MomentumAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MomentumAnimation")
            .field("running", &self.is_running())
            .field("velocity", &self.velocity())
            .field("spec", &self.spec)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/momentum_tests.rs"]
mod tests;
