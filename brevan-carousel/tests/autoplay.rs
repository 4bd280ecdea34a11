mod common;

use brevan_carousel::{CarouselMessage, CarouselMode, Effect};
use common::*;

#[test]
fn ticks_are_ignored_while_a_finger_is_down() {
    let mut c = carousel(3, CarouselMode::Custom, true);
    let generation = armed_generation(&c.start()).expect("armed");

    c.update(CarouselMessage::TouchStart(touch(500.0, 300.0, 0.0)));
    let fx = c.update(CarouselMessage::AutoplayTick { generation });
    assert!(fx.is_empty());
    assert_eq!(c.index(), 0);
}

#[test]
fn swipe_rearms_autoplay_only_after_animation() {
    let mut c = carousel(3, CarouselMode::Custom, true);
    c.start();
    let release = swipe(&mut c, 800.0, 200.0, 200.0);
    assert!(armed_generation(&release).is_none());

    let settled = finish(&mut c, &release);
    let generation = armed_generation(&settled).expect("re-armed");
    assert_eq!(c.index(), 1);

    let fx = c.update(CarouselMessage::AutoplayTick { generation });
    finish(&mut c, &fx);
    assert_eq!(c.index(), 2);
}

#[test]
fn tick_during_animation_is_skipped() {
    let mut c = carousel(3, CarouselMode::Custom, true);
    let generation = armed_generation(&c.start()).expect("armed");
    let fx = c.update(CarouselMessage::Next);
    assert!(c.update(CarouselMessage::AutoplayTick { generation }).is_empty());
    finish(&mut c, &fx);
    assert_eq!(c.index(), 1);
}

#[test]
fn hover_pauses_and_leave_resumes() {
    let mut c = carousel(4, CarouselMode::Custom, true);
    let generation = armed_generation(&c.start()).expect("armed");

    assert_eq!(
        c.update(CarouselMessage::PointerEnter),
        vec![Effect::CancelAutoplay]
    );
    assert!(c.update(CarouselMessage::AutoplayTick { generation }).is_empty());

    let fx = c.update(CarouselMessage::PointerLeave);
    let fresh = armed_generation(&fx).expect("re-armed");
    assert_ne!(fresh, generation);
    let fx = c.update(CarouselMessage::AutoplayTick { generation: fresh });
    finish(&mut c, &fx);
    assert_eq!(c.index(), 1);
}

#[test]
fn native_autoplay_scrolls_smoothly_and_wraps() {
    let mut c = carousel(2, CarouselMode::Native, true);
    let generation = armed_generation(&c.start()).expect("armed");
    c.update(CarouselMessage::AutoplayTick { generation });
    assert_eq!(c.index(), 1);
    let fx = c.update(CarouselMessage::AutoplayTick { generation });
    assert!(fx.contains(&Effect::ScrollTo {
        left: 0.0,
        behavior: brevan_carousel::ScrollBehavior::Smooth,
    }));
    assert_eq!(c.index(), 0);
}

#[test]
fn single_slide_stays_still_through_hover_and_touch() {
    let mut c = carousel(1, CarouselMode::Custom, true);
    assert_eq!(armed_generation(&c.start()), None);

    c.update(CarouselMessage::PointerEnter);
    assert_eq!(armed_generation(&c.update(CarouselMessage::PointerLeave)), None);

    c.update(CarouselMessage::TouchStart(touch(500.0, 300.0, 0.0)));
    assert_eq!(
        armed_generation(&c.update(CarouselMessage::TouchEnd(touch(100.0, 300.0, 50.0)))),
        None
    );
    assert!(!c.autoplay().is_armed());
}

#[test]
fn cleared_carousel_is_inert_on_hover_out() {
    let mut c = carousel(3, CarouselMode::Custom, true);
    assert!(armed_generation(&c.start()).is_some());
    assert!(c.clear().contains(&Effect::CancelAutoplay));

    c.update(CarouselMessage::PointerEnter);
    let fx = c.update(CarouselMessage::PointerLeave);
    assert_eq!(armed_generation(&fx), None);
    assert!(!c.autoplay().is_armed());
}
