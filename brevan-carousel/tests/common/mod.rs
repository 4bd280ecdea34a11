#![allow(dead_code)]

use brevan_carousel::{
    Carousel, CarouselKey, CarouselMessage, CarouselMode, CarouselOptions,
    Effect, TouchPoint, TransitionEnd, TransitionToken,
};
use brevan_model::{Slide, SlideSource};

pub const WIDTH: f32 = 1000.0;

pub fn source(n: usize) -> SlideSource {
    SlideSource::new(
        (0..n)
            .map(|i| Slide::new(format!("/img/{i}.jpg"), format!("Photo {}", i + 1)))
            .collect(),
    )
}

pub fn carousel(n: usize, mode: CarouselMode, autoplay: bool) -> Carousel {
    Carousel::new(
        CarouselKey::Hero,
        source(n),
        CarouselOptions::new(mode)
            .with_autoplay(autoplay)
            .with_width(WIDTH),
    )
}

pub fn touch(x: f32, y: f32, t: f64) -> TouchPoint {
    TouchPoint::new(x, y, t)
}

pub fn awaited_token(effects: &[Effect]) -> Option<TransitionToken> {
    effects.iter().find_map(|e| match e {
        Effect::AwaitTransition { token, .. } => Some(*token),
        _ => None,
    })
}

pub fn armed_generation(effects: &[Effect]) -> Option<u64> {
    effects.iter().find_map(|e| match e {
        Effect::ArmAutoplay { generation, .. } => Some(*generation),
        _ => None,
    })
}

/// Report the animation awaited in `effects` as finished.
pub fn finish(c: &mut Carousel, effects: &[Effect]) -> Vec<Effect> {
    let token = awaited_token(effects).expect("an animation to be awaited");
    c.update(CarouselMessage::TransitionSettled {
        token,
        how: TransitionEnd::Finished,
    })
}

/// Drive a full one-finger swipe and return the effects of the release.
pub fn swipe(
    c: &mut Carousel,
    from_x: f32,
    to_x: f32,
    duration_ms: f64,
) -> Vec<Effect> {
    c.update(CarouselMessage::TouchStart(touch(from_x, 300.0, 0.0)));
    let mid = from_x + (to_x - from_x) / 2.0;
    c.update(CarouselMessage::TouchMove(touch(mid, 300.0, duration_ms / 2.0)));
    c.update(CarouselMessage::TouchMove(touch(to_x, 300.0, duration_ms)));
    c.update(CarouselMessage::TouchEnd(touch(to_x, 300.0, duration_ms)))
}
