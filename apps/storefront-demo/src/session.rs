//! Scripted interaction session against a simulated display.

use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::{FrameScheduler, FRAME_INTERVAL_NANOS};
use storefront_foundation::PointerEvent;
use storefront_ui::{
    CarouselConfig, CarouselController, CarouselTrack, ScrollDirection, ScrollTrack,
    TickerAnimation, TickerState,
};
use web_time::Duration;

const CARD_WIDTH: f32 = 300.0;
const CARD_COUNT: usize = 12;
const VIEWPORT_WIDTH: f32 = 1_280.0;

/// Drives one mounted carousel plus the announcement ticker.
pub struct Session {
    scheduler: FrameScheduler,
    now_nanos: u64,
    track: Rc<CarouselTrack>,
    controller: CarouselController,
    _ticker: TickerAnimation,
}

impl Session {
    pub fn new(messages: Vec<String>, ticker_interval: Duration) -> anyhow::Result<Self> {
        let scheduler = FrameScheduler::new();
        let clock = scheduler.frame_clock();
        let config = CarouselConfig::default();

        let track = CarouselTrack::new(clock.clone());
        let content_width =
            CARD_COUNT as f32 * (CARD_WIDTH + config.card_gap) - config.card_gap;
        track.set_extents(content_width, VIEWPORT_WIDTH);
        track.set_card_width(Some(CARD_WIDTH));

        let mut controller = CarouselController::new(clock.clone(), config);
        controller.attach_track(Rc::clone(&track) as Rc<dyn ScrollTrack>);

        let state = Rc::new(RefCell::new(TickerState::new(messages, ticker_interval)?));
        if let Some(first) = state.borrow().current() {
            log::info!("ticker: {first}");
        }
        let ticker = TickerAnimation::start(&clock, state, |message| {
            log::info!("ticker: {message}");
        });

        Ok(Self {
            scheduler,
            now_nanos: 0,
            track,
            controller,
            _ticker: ticker,
        })
    }

    pub fn offset(&self) -> f32 {
        self.track.scroll_offset()
    }

    fn frame(&mut self) {
        self.now_nanos += FRAME_INTERVAL_NANOS;
        self.scheduler.drain_frame_callbacks(self.now_nanos);
    }

    /// Sends a pointer event, then lets one frame pass.
    fn pointer(&mut self, event: PointerEvent) {
        let disposition = self.controller.handle_pointer(event);
        log::debug!("{event:?} -> {disposition:?} offset={:.1}", self.offset());
        self.frame();
    }

    /// Drags from `from_x` to `to_x` in `steps` moves and releases.
    pub fn fling(&mut self, from_x: f32, to_x: f32, steps: u32) {
        self.pointer(PointerEvent::down(from_x));
        let steps = steps.max(1);
        for step in 1..=steps {
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            self.pointer(PointerEvent::moved(x));
        }
        log::info!(
            "release at offset {:.1} with velocity {:.2} px/frame",
            self.offset(),
            self.controller.drag_state().velocity()
        );
        self.pointer(PointerEvent::up(to_x));
    }

    pub fn step(&mut self, direction: ScrollDirection) {
        if !self.controller.scroll_by_card(direction) {
            log::warn!("card step {direction:?} had no effect");
        }
    }

    /// Runs frames until the carousel settles or `max_frames` pass.
    pub fn settle(&mut self, max_frames: u32) -> u32 {
        let mut frames = 0;
        while frames < max_frames
            && (self.controller.is_momentum_running() || self.track.is_smooth_scrolling())
        {
            self.frame();
            frames += 1;
        }
        frames
    }

    /// Lets time pass with no input.
    pub fn idle(&mut self, duration: Duration) {
        let frames = duration.as_nanos() / u128::from(FRAME_INTERVAL_NANOS);
        for _ in 0..frames {
            self.frame();
        }
    }
}
