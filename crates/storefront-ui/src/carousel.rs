//! Drag-to-scroll controller for the featured product carousel.
//!
//! One [`CarouselController`] exists per mounted carousel. The host wires
//! pointer events to the four handlers (or to [`handle_pointer`]) and the
//! previous/next buttons to [`scroll_by_card`]. Every handler is a silent
//! no-op when its preconditions are not met: no track attached, no drag in
//! progress, no card rendered.
//!
//! [`handle_pointer`]: CarouselController::handle_pointer
//! [`scroll_by_card`]: CarouselController::scroll_by_card

use crate::config::CarouselConfig;
use crate::momentum::MomentumAnimation;
use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::FrameClock;
use storefront_foundation::{
    card_step_delta, DragState, EventDisposition, PointerEvent, PointerEventKind,
    ScrollDirection, ScrollTrack,
};

/// Slot holding the currently mounted track, shared with momentum frames so a
/// glide notices an unmount.
type TrackSlot = Rc<RefCell<Option<Rc<dyn ScrollTrack>>>>;

pub struct CarouselController {
    drag: DragState,
    momentum: MomentumAnimation,
    track: TrackSlot,
    config: CarouselConfig,
}

impl CarouselController {
    pub fn new(frame_clock: FrameClock, config: CarouselConfig) -> Self {
        Self {
            drag: DragState::new(),
            momentum: MomentumAnimation::new(frame_clock, config.momentum),
            track: Rc::new(RefCell::new(None)),
            config,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_momentum_running(&self) -> bool {
        self.momentum.is_running()
    }

    pub fn has_track(&self) -> bool {
        self.track.borrow().is_some()
    }

    /// Mounts the track the controller scrolls.
    pub fn attach_track(&mut self, track: Rc<dyn ScrollTrack>) {
        self.momentum.cancel();
        self.drag.reset();
        *self.track.borrow_mut() = Some(track);
    }

    /// Unmounts the track, cancelling any glide and forgetting the drag.
    pub fn detach_track(&mut self) {
        self.momentum.cancel();
        self.drag.reset();
        self.track.borrow_mut().take();
        log::trace!("carousel track detached");
    }

    fn current_track(&self) -> Option<Rc<dyn ScrollTrack>> {
        self.track.borrow().clone()
    }

    /// Routes a raw pointer event to its handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EventDisposition {
        match event.kind {
            PointerEventKind::Down => self.on_drag_start(event.x),
            PointerEventKind::Move => self.on_drag_move(event.x),
            PointerEventKind::Up => self.on_pointer_up(),
            PointerEventKind::Leave => self.on_pointer_leave(),
        }
    }

    /// Pointer down: cancels any glide or card step and starts a drag at
    /// `pointer_x`.
    pub fn on_drag_start(&mut self, pointer_x: f32) -> EventDisposition {
        let Some(track) = self.current_track() else {
            log::trace!("drag start ignored: no track");
            return EventDisposition::Ignored;
        };
        self.momentum.cancel();
        track.stop_smooth_scroll();
        self.drag.begin(pointer_x, track.scroll_offset());
        EventDisposition::Consumed
    }

    /// Pointer move: scrolls the track by the amplified pointer travel and
    /// samples the velocity.
    ///
    /// `Consumed` tells the host to suppress default drag selection.
    pub fn on_drag_move(&mut self, pointer_x: f32) -> EventDisposition {
        let Some(target) = self.drag.target_offset(pointer_x, self.config.drag_gain) else {
            return EventDisposition::Ignored;
        };
        let Some(track) = self.current_track() else {
            return EventDisposition::Ignored;
        };

        let previous = track.scroll_offset();
        track.set_scroll_offset(target);
        self.drag.record_scroll(previous, track.scroll_offset());
        EventDisposition::Consumed
    }

    pub fn on_pointer_up(&mut self) -> EventDisposition {
        self.end_drag()
    }

    pub fn on_pointer_leave(&mut self) -> EventDisposition {
        self.end_drag()
    }

    fn end_drag(&mut self) -> EventDisposition {
        let Some(velocity) = self.drag.end() else {
            return EventDisposition::Ignored;
        };
        if self.has_track() {
            let slot = Rc::clone(&self.track);
            self.momentum.start(velocity, move |delta| {
                let Some(track) = slot.borrow().clone() else {
                    return false;
                };
                track.set_scroll_offset(track.scroll_offset() + delta);
                true
            });
        }
        EventDisposition::Consumed
    }

    /// Requests an eased scroll by one card width plus the card gap.
    ///
    /// Returns `false` without doing anything when no track is mounted or no
    /// card is rendered. Drag and momentum state are left untouched.
    pub fn scroll_by_card(&self, direction: ScrollDirection) -> bool {
        let Some(track) = self.current_track() else {
            log::trace!("card step ignored: no track");
            return false;
        };
        let Some(card_width) = track.reference_item_width() else {
            log::trace!("card step ignored: no card rendered");
            return false;
        };
        let delta = card_step_delta(direction, card_width, self.config.card_gap);
        log::trace!("card step {direction:?} by {delta}");
        track.smooth_scroll_by(delta);
        true
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.momentum.cancel();
    }
}

impl std::fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("drag", &self.drag)
            .field("momentum", &self.momentum)
            .field("has_track", &self.has_track())
            .field("config", &self.config)
            .finish()
    }
}
