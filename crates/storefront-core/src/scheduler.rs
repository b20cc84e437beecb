//! Single-threaded frame callback queue.
//!
//! The host platform owns a [`FrameScheduler`] and calls
//! [`FrameScheduler::drain_frame_callbacks`] once per display refresh. Anything
//! that wants to run "before the next repaint" registers through a
//! [`FrameClock`](crate::FrameClock) obtained from the scheduler.

use crate::{FrameCallbackId, FrameClock};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<FrameCallback>,
}

pub(crate) struct SchedulerInner {
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<FrameCallbackId>,
    frames_drained: Cell<u64>,
}

impl SchedulerInner {
    fn new() -> Self {
        Self {
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            frames_drained: Cell::new(0),
        }
    }

    fn register_frame_callback(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) -> bool {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        match callbacks.iter().position(|entry| entry.id == id) {
            Some(index) => {
                callbacks.remove(index);
                true
            }
            None => false,
        }
    }

    fn is_frame_callback_pending(&self, id: FrameCallbackId) -> bool {
        self.frame_callbacks
            .borrow()
            .iter()
            .any(|entry| entry.id == id)
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        // Take the whole queue first: callbacks registered while draining
        // belong to the next frame.
        let mut pending: SmallVec<[FrameCallback; 4]> = SmallVec::new();
        {
            let mut callbacks = self.frame_callbacks.borrow_mut();
            while let Some(mut entry) = callbacks.pop_front() {
                if let Some(callback) = entry.callback.take() {
                    pending.push(callback);
                }
            }
        }
        let ran = pending.len();
        for callback in pending {
            callback(frame_time_nanos);
        }
        self.frames_drained.set(self.frames_drained.get() + 1);
        ran
    }

    fn pending_frame_callbacks(&self) -> usize {
        self.frame_callbacks.borrow().len()
    }
}

/// Owner of the frame callback queue.
///
/// Dropping the scheduler tears the queue down; outstanding
/// [`SchedulerHandle`]s and clocks turn into no-ops.
pub struct FrameScheduler {
    inner: Rc<SchedulerInner>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(SchedulerInner::new()),
        }
    }

    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }

    /// Runs every callback that was queued before this call.
    ///
    /// Returns the number of callbacks that ran.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        let ran = self.inner.drain_frame_callbacks(frame_time_nanos);
        log::trace!(
            "frame {} at {frame_time_nanos}ns ran {ran} callbacks",
            self.inner.frames_drained.get()
        );
        ran
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner.pending_frame_callbacks() > 0
    }

    pub fn pending_frame_callbacks(&self) -> usize {
        self.inner.pending_frame_callbacks()
    }

    /// Number of frames drained so far.
    pub fn frames_drained(&self) -> u64 {
        self.inner.frames_drained.get()
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("pending", &self.pending_frame_callbacks())
            .field("frames_drained", &self.frames_drained())
            .finish()
    }
}

/// Weak, cloneable reference to a [`FrameScheduler`].
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<SchedulerInner>,
}

impl SchedulerHandle {
    /// Queues `callback` for the next drain. Returns `None` once the
    /// scheduler has been dropped.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    /// Removes a queued callback. Unknown or already-fired ids are ignored.
    pub fn cancel_frame_callback(&self, id: FrameCallbackId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.cancel_frame_callback(id))
            .unwrap_or(false)
    }

    pub fn is_frame_callback_pending(&self, id: FrameCallbackId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_frame_callback_pending(id))
            .unwrap_or(false)
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl std::fmt::Debug for SchedulerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}
