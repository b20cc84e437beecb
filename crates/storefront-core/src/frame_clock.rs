use crate::scheduler::SchedulerHandle;
use crate::FrameCallbackId;

/// Requests work "before the next repaint".
#[derive(Clone, Debug)]
pub struct FrameClock {
    scheduler: SchedulerHandle,
}

impl FrameClock {
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self { scheduler }
    }

    pub fn scheduler_handle(&self) -> SchedulerHandle {
        self.scheduler.clone()
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        match self.scheduler.register_frame_callback(callback) {
            Some(id) => FrameCallbackRegistration::new(self.scheduler.clone(), id),
            None => {
                log::trace!("frame callback dropped: scheduler torn down");
                FrameCallbackRegistration::inactive(self.scheduler.clone())
            }
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| {
            let millis = nanos / 1_000_000;
            callback(millis);
        })
    }
}

/// Handle to one queued frame callback.
///
/// Dropping or cancelling the registration removes the callback if it has
/// not run yet. Both are no-ops once it has fired or been cancelled.
pub struct FrameCallbackRegistration {
    scheduler: SchedulerHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(scheduler: SchedulerHandle, id: FrameCallbackId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    fn inactive(scheduler: SchedulerHandle) -> Self {
        Self {
            scheduler,
            id: None,
        }
    }

    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    /// True while the callback is still waiting for a frame.
    pub fn is_active(&self) -> bool {
        self.id
            .is_some_and(|id| self.scheduler.is_frame_callback_pending(id))
    }

    pub fn cancel(mut self) {
        self.cancel_in_place();
    }

    pub(crate) fn cancel_in_place(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_in_place();
    }
}

impl std::fmt::Debug for FrameCallbackRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameCallbackRegistration")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
