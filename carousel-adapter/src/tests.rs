use crate::*;

use carousel::{
    Carousel, CarouselOptions, ItemContent, Phase, Point, ResizePolicy, ScrollPolicy, Size,
};
use std::rc::Rc;
use std::vec::Vec;

#[derive(Clone, Debug)]
struct Tile;

impl ItemContent for Tile {
    fn intrinsic_size(&self) -> Size {
        Size::new(50.0, 50.0)
    }
}

fn driver(count: usize, options: CarouselOptions) -> Driver<Tile> {
    let mut c = Carousel::new(options.with_resize_policy(ResizePolicy::Fixed(0.0)));
    c.configure_with_list_cloned((0..count).map(|_| Rc::new(Tile)).collect())
        .unwrap();
    Driver::new(c).with_animation(200, Easing::Linear)
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert_eq!(easing.sample(0.5), 0.5);
    }
    assert!(Easing::EaseInOutCubic.sample(0.25) < Easing::Linear.sample(0.25));
}

#[test]
fn tween_samples_monotonically_until_done() {
    let tween = Tween::new(100.0, 400.0, 10, 100, Easing::SmoothStep);
    let mut last = tween.sample(0);
    assert_eq!(last, 100.0);
    for now_ms in [10u64, 20, 40, 60, 80, 110] {
        let off = tween.sample(now_ms);
        assert!(off >= last);
        last = off;
    }
    assert_eq!(last, 400.0);
    assert!(!tween.is_done(109));
    assert!(tween.is_done(110));

    let instant = Tween::new(0.0, 10.0, 5, 0, Easing::Linear);
    assert_eq!(instant.duration_ms, 1);
    assert_eq!(instant.sample(6), 10.0);
}

#[test]
fn tween_retarget_starts_from_current_position() {
    let mut tween = Tween::new(0.0, 200.0, 0, 100, Easing::Linear);
    tween.retarget(50, 500.0, 100);
    assert_eq!(tween.from, 100.0);
    assert_eq!(tween.to, 500.0);
    assert_eq!(tween.start_ms, 50);
    assert_eq!(tween.sample(150), 500.0);
}

#[test]
fn paged_tween_scales_duration_with_distance() {
    let short = Tween::paged(0.0, 50.0, 0, 100.0, 200, Easing::Linear);
    assert_eq!(short.duration_ms, 100);
    assert_eq!(short.sample(50), 25.0);

    let long = Tween::paged(900.0, 300.0, 0, 100.0, 200, Easing::Linear);
    assert_eq!(long.duration_ms, 200);

    let no_page = Tween::paged(0.0, 50.0, 0, 0.0, 200, Easing::Linear);
    assert_eq!(no_page.duration_ms, 200);

    let mut tween = Tween::paged(0.0, 100.0, 0, 100.0, 200, Easing::Linear);
    tween.retarget_paged(100, 75.0, 100.0, 200);
    assert_eq!((tween.from, tween.to), (50.0, 75.0));
    assert_eq!(tween.duration_ms, 50);
}

#[test]
fn driver_animates_tap_and_reports_completion() {
    let mut d = driver(5, CarouselOptions::new());
    assert_eq!(d.set_viewport(Size::new(100.0, 100.0), 0), Ok(Some(0.0)));

    assert_eq!(d.on_tap(Point::new(250.0, 50.0), 0), None);
    assert!(d.is_animating());

    assert_eq!(d.tick(100), Some(100.0));
    assert_eq!(d.carousel().content_offset(), 100.0);
    assert!(matches!(d.carousel().phase(), Phase::Settling { target: 2, .. }));

    // Settled at 200, inside the first third of 1500, so the driver jumps to the middle copy.
    assert_eq!(d.tick(200), Some(700.0));
    assert!(!d.is_animating());
    assert_eq!(d.carousel().current_index(), Some(2));
    assert_eq!(d.carousel().content_offset(), 700.0);
    assert_eq!(d.carousel().selected_index(), Some(2));
    assert_eq!(d.tick(250), None);
}

#[test]
fn settle_in_middle_copy_is_not_recentered() {
    let mut d = driver(5, CarouselOptions::new());
    d.set_viewport(Size::new(100.0, 100.0), 0).unwrap();
    d.select_item(7, true, 0);
    assert_eq!(d.tick(200), Some(700.0));
    assert_eq!(d.carousel().current_index(), Some(2));
}

#[test]
fn driver_retargets_running_tween() {
    let mut d = driver(5, CarouselOptions::new());
    d.set_viewport(Size::new(100.0, 100.0), 0).unwrap();

    d.on_tap(Point::new(250.0, 50.0), 0);
    assert_eq!(d.tick(100), Some(100.0));
    assert_eq!(d.on_tap(Point::new(450.0, 50.0), 100), None);

    let tween = d.tween().copied().unwrap();
    assert_eq!((tween.from, tween.to, tween.start_ms), (100.0, 400.0, 100));

    let mut offsets = Vec::new();
    for now_ms in [150u64, 200, 250, 300] {
        offsets.extend(d.tick(now_ms));
    }
    // 400 lies in the first third, so the last frame lands on the middle copy.
    assert_eq!(offsets.last(), Some(&900.0));
    assert_eq!(d.carousel().current_index(), Some(4));
}

#[test]
fn drag_interrupts_settle_animation() {
    let mut d = driver(5, CarouselOptions::new());
    d.set_viewport(Size::new(100.0, 100.0), 0).unwrap();
    d.on_tap(Point::new(250.0, 50.0), 0);
    d.tick(100);

    assert!(d.on_drag_start());
    assert!(!d.is_animating());
    assert_eq!(d.carousel().phase(), Phase::Dragging);

    // 70 is inside the first third of 1500, so the viewport jumps forward by 500.
    assert_eq!(d.on_drag(-30.0, 120), Some(570.0));
    assert_eq!(d.on_drag(10.0, 125), Some(580.0));

    assert_eq!(d.on_drag_end(0.0, 130), None);
    assert!(d.is_animating());
    assert_eq!(d.tick(330), Some(600.0));
    assert_eq!(d.carousel().current_index(), Some(1));
}

#[test]
fn max_steps_blocks_drags_while_settling() {
    let mut d = driver(
        10,
        CarouselOptions::new().with_scroll_policy(ScrollPolicy::MaxSteps(1)),
    );
    d.set_viewport(Size::new(100.0, 100.0), 0).unwrap();

    assert!(d.on_drag_start());
    assert_eq!(d.on_drag(250.0, 0), Some(1250.0));
    assert_eq!(d.on_drag_end(0.0, 0), None);
    assert_eq!(d.tween().map(|t| t.to), Some(1100.0));

    assert!(!d.on_drag_start());
    assert!(d.is_animating());

    assert_eq!(d.tick(200), Some(1100.0));
    assert_eq!(d.carousel().current_index(), Some(1));
    assert!(d.on_drag_start());
}

#[test]
fn viewport_change_cancels_animation() {
    let mut d = driver(5, CarouselOptions::new());
    d.set_viewport(Size::new(100.0, 100.0), 0).unwrap();
    d.select_item(8, true, 0);
    assert!(d.is_animating());

    // Selection is still 0, so its middle copy is centred.
    assert_eq!(d.set_viewport(Size::new(200.0, 100.0), 10), Ok(Some(1000.0)));
    assert!(!d.is_animating());
    assert_eq!(d.carousel().current_index(), Some(0));
}
