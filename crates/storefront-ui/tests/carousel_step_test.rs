//! Arrow-button stepping of the featured collection carousel.

use std::rc::Rc;
use storefront_animation::MomentumDecay;
use storefront_testing::prelude::*;
use storefront_ui::{
    CarouselConfig, CarouselController, CarouselTrack, ScrollDirection, ScrollTrack,
};

#[test]
fn step_delta_is_card_width_plus_gap() {
    let driver = TestFrameDriver::new();
    let mut controller = CarouselController::new(driver.frame_clock(), CarouselConfig::default());

    for width in [0.0, 260.0, 300.0, 340.0] {
        let track = FakeTrack::with_card_width(0.0, width);
        controller.attach_track(track.clone());

        assert!(controller.scroll_by_card(ScrollDirection::Left));
        assert!(controller.scroll_by_card(ScrollDirection::Right));
        assert_eq!(track.smooth_requests(), vec![-(width + 16.0), width + 16.0]);
    }
}

#[test]
fn step_without_card_is_noop() {
    let driver = TestFrameDriver::new();
    let track = FakeTrack::new(0.0);
    let mut controller = CarouselController::new(driver.frame_clock(), CarouselConfig::default());
    controller.attach_track(track.clone());

    assert!(!controller.scroll_by_card(ScrollDirection::Right));
    assert!(track.smooth_requests().is_empty());
    assert_eq!(track.write_count(), 0);
}

#[test]
fn step_without_track_is_noop() {
    let driver = TestFrameDriver::new();
    let controller = CarouselController::new(driver.frame_clock(), CarouselConfig::default());

    assert!(!controller.scroll_by_card(ScrollDirection::Left));
}

#[test]
fn step_leaves_drag_state_alone() {
    let driver = TestFrameDriver::new();
    let track = FakeTrack::with_card_width(500.0, 300.0);
    let mut controller = CarouselController::new(driver.frame_clock(), CarouselConfig::default());
    controller.attach_track(track.clone());

    controller.on_drag_start(100.0);
    controller.on_drag_move(90.0);
    let during_drag = *controller.drag_state();

    controller.scroll_by_card(ScrollDirection::Right);
    assert_eq!(*controller.drag_state(), during_drag);

    controller.on_pointer_up();
    let running = controller.is_momentum_running();
    controller.scroll_by_card(ScrollDirection::Left);
    assert_eq!(controller.is_momentum_running(), running);
}

#[test]
fn custom_gap_is_used() {
    let driver = TestFrameDriver::new();
    let track = FakeTrack::with_card_width(0.0, 200.0);
    let mut controller = CarouselController::new(
        driver.frame_clock(),
        CarouselConfig::default().with_card_gap(24.0),
    );
    controller.attach_track(track.clone());

    controller.scroll_by_card(ScrollDirection::Right);
    assert_eq!(track.smooth_requests(), vec![224.0]);
}

#[test]
fn carousel_track_eases_to_next_card() {
    let driver = TestFrameDriver::new();
    let track = CarouselTrack::new(driver.frame_clock());
    track.set_extents(12.0 * 356.0, 1_200.0);
    track.set_card_width(Some(340.0));
    let mut controller = CarouselController::new(driver.frame_clock(), CarouselConfig::default());
    controller.attach_track(Rc::clone(&track) as Rc<dyn ScrollTrack>);

    assert!(controller.scroll_by_card(ScrollDirection::Right));
    driver.run_until_idle(120);
    assert!((track.scroll_offset() - 356.0).abs() < 1e-3);

    assert!(controller.scroll_by_card(ScrollDirection::Left));
    assert!(controller.scroll_by_card(ScrollDirection::Left));
    driver.run_until_idle(120);
    assert_eq!(track.scroll_offset(), 0.0);
}

#[test]
fn carousel_track_without_cards_is_noop() {
    let driver = TestFrameDriver::new();
    let track = CarouselTrack::new(driver.frame_clock());
    track.set_extents(0.0, 1_200.0);
    let mut controller = CarouselController::new(driver.frame_clock(), CarouselConfig::default());
    controller.attach_track(track.clone());

    assert!(!controller.scroll_by_card(ScrollDirection::Right));
    assert!(!driver.has_pending_frame());
}

fn stepping_track(driver: &TestFrameDriver) -> (Rc<CarouselTrack>, CarouselController) {
    let track = CarouselTrack::new(driver.frame_clock());
    track.set_extents(8_000.0, 1_200.0);
    track.set_card_width(Some(300.0));
    track.set_scroll_offset(1_000.0);
    let mut controller = CarouselController::new(driver.frame_clock(), CarouselConfig::default());
    controller.attach_track(Rc::clone(&track) as Rc<dyn ScrollTrack>);
    (track, controller)
}

#[test]
fn drag_takes_over_running_step() {
    let driver = TestFrameDriver::new();
    let (track, mut controller) = stepping_track(&driver);

    assert!(controller.scroll_by_card(ScrollDirection::Right));
    driver.advance_frames(3);
    assert!(track.is_smooth_scrolling());

    controller.on_drag_start(500.0);
    assert!(!track.is_smooth_scrolling());
    let grabbed = track.scroll_offset();
    assert!(grabbed > 1_000.0 && grabbed < 1_316.0);

    driver.advance_frame();
    assert_eq!(track.scroll_offset(), grabbed);

    controller.on_drag_move(600.0);
    driver.advance_frame();
    assert!((track.scroll_offset() - (grabbed - 140.0)).abs() < 1e-3);
    assert!(!driver.has_pending_frame());
}

#[test]
fn fling_takes_over_running_step() {
    let driver = TestFrameDriver::new();
    let (track, mut controller) = stepping_track(&driver);

    controller.scroll_by_card(ScrollDirection::Right);
    driver.advance_frames(3);

    controller.on_drag_start(500.0);
    controller.on_drag_move(500.0 - 20.0 / 1.4);
    let velocity = controller.drag_state().velocity();
    let released_at = track.scroll_offset();
    controller.on_pointer_up();
    assert!(controller.is_momentum_running());

    driver.run_until_idle(1_000);

    assert!(!track.is_smooth_scrolling());
    assert!(!controller.is_momentum_running());
    let travelled = track.scroll_offset() - released_at;
    assert!((travelled - MomentumDecay::default().glide_distance(velocity)).abs() < 0.05);
}
