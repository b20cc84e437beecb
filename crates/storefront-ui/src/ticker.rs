//! Rotating announcement bar shown above the storefront header.
//!
//! [`TickerState`] is the pure rotation model; [`TickerAnimation`] feeds it
//! frame times from a [`FrameClock`] until stopped.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use storefront_core::{FrameCallbackRegistration, FrameClock};
use web_time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    IndexOutOfRange { index: usize, len: usize },
    ZeroInterval,
}

impl fmt::Display for TickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickerError::IndexOutOfRange { index, len } => {
                write!(f, "message index {index} out of range for {len} messages")
            }
            TickerError::ZeroInterval => write!(f, "ticker interval must be non-zero"),
        }
    }
}

impl std::error::Error for TickerError {}

/// Which announcement is showing and when the next one is due.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerState {
    messages: Vec<String>,
    interval_nanos: u64,
    index: usize,
    /// Frame time the current interval started at; set by the first frame.
    anchor_nanos: Option<u64>,
}

impl TickerState {
    pub fn new<I, S>(messages: I, interval: Duration) -> Result<Self, TickerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let interval_nanos = u64::try_from(interval.as_nanos()).unwrap_or(u64::MAX);
        if interval_nanos == 0 {
            return Err(TickerError::ZeroInterval);
        }
        Ok(Self {
            messages: messages.into_iter().map(Into::into).collect(),
            interval_nanos,
            index: 0,
            anchor_nanos: None,
        })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Message to show, or `None` when there is nothing to render.
    pub fn current(&self) -> Option<&str> {
        self.messages.get(self.index).map(String::as_str)
    }

    /// Moves to the next message, wrapping to the first.
    pub fn advance(&mut self) {
        if !self.messages.is_empty() {
            self.index = (self.index + 1) % self.messages.len();
        }
    }

    /// Jumps to `index` (a dot was clicked). The rotation timer keeps its
    /// cadence.
    pub fn select(&mut self, index: usize) -> Result<(), TickerError> {
        if index >= self.messages.len() {
            return Err(TickerError::IndexOutOfRange {
                index,
                len: self.messages.len(),
            });
        }
        self.index = index;
        Ok(())
    }

    /// Replaces the messages and restarts the timer.
    pub fn set_messages<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages = messages.into_iter().map(Into::into).collect();
        if self.index >= self.messages.len() {
            self.index = 0;
        }
        self.anchor_nanos = None;
    }

    /// Advances once per whole interval elapsed since the anchor.
    ///
    /// Returns `true` when the shown message changed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        if self.messages.is_empty() {
            return false;
        }
        let Some(anchor) = self.anchor_nanos else {
            self.anchor_nanos = Some(frame_time_nanos);
            return false;
        };
        let elapsed_intervals = frame_time_nanos.saturating_sub(anchor) / self.interval_nanos;
        if elapsed_intervals == 0 {
            return false;
        }
        self.anchor_nanos = Some(anchor + elapsed_intervals * self.interval_nanos);

        let len = self.messages.len() as u64;
        let before = self.index;
        self.index = ((self.index as u64 + elapsed_intervals % len) % len) as usize;
        self.index != before
    }
}

struct TickerLoop {
    active: bool,
    registration: Option<FrameCallbackRegistration>,
}

type ChangeFn = Rc<dyn Fn(&str)>;

fn schedule_tick(
    ticker_loop: Rc<RefCell<TickerLoop>>,
    frame_clock: FrameClock,
    state: Rc<RefCell<TickerState>>,
    on_change: ChangeFn,
) {
    let loop_for_closure = Rc::clone(&ticker_loop);
    let frame_clock_for_closure = frame_clock.clone();

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        if !loop_for_closure.borrow().active {
            return;
        }
        let changed = state.borrow_mut().on_frame(frame_time_nanos);
        if changed {
            let message = state.borrow().current().map(str::to_owned);
            if let Some(message) = message {
                log::trace!("ticker showing {message:?}");
                on_change(&message);
            }
        }
        schedule_tick(loop_for_closure, frame_clock_for_closure, state, on_change);
    });

    let mut guard = ticker_loop.borrow_mut();
    if registration.id().is_none() {
        log::debug!("ticker stopped: frame scheduler is gone");
        guard.active = false;
    } else if guard.active {
        guard.registration = Some(registration);
    }
}

/// Keeps a [`TickerState`] rotating on every frame until stopped or dropped.
pub struct TickerAnimation {
    ticker_loop: Rc<RefCell<TickerLoop>>,
}

impl TickerAnimation {
    /// Starts rotating `state`; `on_change` receives each newly shown message.
    pub fn start<F>(frame_clock: &FrameClock, state: Rc<RefCell<TickerState>>, on_change: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        let ticker_loop = Rc::new(RefCell::new(TickerLoop {
            active: true,
            registration: None,
        }));
        if state.borrow().is_empty() {
            log::debug!("ticker not started: no messages");
            ticker_loop.borrow_mut().active = false;
        } else {
            schedule_tick(
                Rc::clone(&ticker_loop),
                frame_clock.clone(),
                state,
                Rc::new(on_change),
            );
        }
        Self { ticker_loop }
    }

    pub fn is_active(&self) -> bool {
        self.ticker_loop.borrow().active
    }

    pub fn stop(&self) {
        let registration = {
            let mut guard = self.ticker_loop.borrow_mut();
            guard.active = false;
            guard.registration.take()
        };
        if let Some(registration) = registration {
            registration.cancel();
        }
    }
}

impl Drop for TickerAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for TickerAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickerAnimation")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/ticker_tests.rs"]
mod tests;
