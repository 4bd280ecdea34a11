//! Full-screen photo overlay
//!
//! Wraps one [`Carousel`] whose slide set is rebuilt on every open: the room
//! overlay shows the clicked card's photos from the first one, the gallery
//! overlay shows every gallery photo starting at the clicked thumbnail.
//! The overlay never autoplays. Closing discards the slides.

use brevan_model::SlideSource;
use tracing::debug;

use crate::carousel::{Carousel, CarouselOptions};
use crate::environment::EnvironmentProbe;
use crate::messages::{CarouselMessage, Effect};
use crate::registry::CarouselKey;
use crate::render::CarouselView;
use crate::runtime_config::CarouselTuning;
use crate::store::CarouselMode;

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayMessage {
    Open { source: SlideSource, start: usize },
    Close,
    /// A click on the enlarged photo at host time `time_ms`.
    ImageClicked { time_ms: f64 },
    /// Click on the dimmed area around the content.
    BackdropClicked,
    Escape,
    Carousel(CarouselMessage),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub visible: bool,
    pub aria_hidden: bool,
    pub full_photo: bool,
    pub single_image: bool,
    pub title: Option<String>,
    pub carousel: CarouselView,
}

#[derive(Debug)]
pub struct OverlayController<P> {
    probe: P,
    carousel: Carousel,
    tuning: CarouselTuning,
    visible: bool,
    full_photo: bool,
}

impl<P: EnvironmentProbe> OverlayController<P> {
    /// `key` should be [`CarouselKey::RoomOverlay`] or
    /// [`CarouselKey::GalleryOverlay`].
    pub fn new(key: CarouselKey, probe: P, tuning: CarouselTuning) -> Self {
        let carousel = Carousel::new(
            key,
            SlideSource::default(),
            CarouselOptions::new(CarouselMode::Custom).with_tuning(tuning),
        );
        Self {
            probe,
            carousel,
            tuning,
            visible: false,
            full_photo: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_full_photo(&self) -> bool {
        self.full_photo
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn open(&mut self, source: SlideSource, width: f32) -> Vec<Effect> {
        self.open_at(source, 0, width)
    }

    /// Rebuild the overlay from `source` and show it at `start` (clamped).
    /// The mode is probed afresh on every open.
    pub fn open_at(
        &mut self,
        source: SlideSource,
        start: usize,
        width: f32,
    ) -> Vec<Effect> {
        let mode = self
            .probe
            .snapshot()
            .mode(self.tuning.native_max_width_px);
        self.carousel.set_width(width);
        let fx = self.carousel.reset(source, start, mode);
        self.visible = true;
        self.full_photo = false;
        debug!(
            key = %self.carousel.key(),
            images = self.carousel.count(),
            start = self.carousel.index(),
            ?mode,
            "overlay opened"
        );
        fx
    }

    pub fn close(&mut self) -> Vec<Effect> {
        if !self.visible {
            return Vec::new();
        }
        self.visible = false;
        self.full_photo = false;
        debug!(key = %self.carousel.key(), "overlay closed");
        self.carousel.clear()
    }

    /// Toggle full-photo mode, unless the click is the tail of a swipe.
    pub fn image_clicked(&mut self, time_ms: f64) -> Vec<Effect> {
        if !self.visible {
            return Vec::new();
        }
        if self.carousel.click_is_swipe_tail(time_ms) {
            debug!("click after swipe ignored");
            return Vec::new();
        }
        self.full_photo = !self.full_photo;
        vec![Effect::Render]
    }

    pub fn update(&mut self, message: OverlayMessage) -> Vec<Effect> {
        match message {
            OverlayMessage::Open { source, start } => {
                let width = self.carousel.width();
                self.open_at(source, start, width)
            }
            OverlayMessage::Close
            | OverlayMessage::BackdropClicked
            | OverlayMessage::Escape => self.close(),
            OverlayMessage::ImageClicked { time_ms } => {
                self.image_clicked(time_ms)
            }
            OverlayMessage::Carousel(message) => {
                if self.visible {
                    self.carousel.update(message)
                } else {
                    Vec::new()
                }
            }
        }
    }

    pub fn view(&self) -> OverlayView {
        let carousel = self.carousel.view();
        OverlayView {
            visible: self.visible,
            aria_hidden: !self.visible,
            full_photo: self.full_photo,
            single_image: carousel.single_image,
            title: carousel.title.clone(),
            carousel,
        }
    }
}

#[cfg(test)]
mod tests {
    use brevan_model::Slide;

    use super::*;
    use crate::environment::Environment;

    fn photos(n: usize) -> SlideSource {
        SlideSource::new(
            (0..n)
                .map(|i| Slide::new(format!("p{i}.jpg"), String::new()))
                .collect(),
        )
        .with_title("Heol")
    }

    fn overlay(env: Environment) -> OverlayController<Environment> {
        OverlayController::new(
            CarouselKey::RoomOverlay,
            env,
            CarouselTuning::default(),
        )
    }

    #[test]
    fn starts_hidden() {
        let o = overlay(Environment::desktop(1280.0));
        let view = o.view();
        assert!(!view.visible);
        assert!(view.aria_hidden);
        assert!(view.carousel.slides.is_empty());
    }

    #[test]
    fn open_forces_warm_up_and_shows() {
        let mut o = overlay(Environment::desktop(1280.0));
        let fx = o.open(photos(3), 800.0);
        assert!(fx.contains(&Effect::WarmUp { force: true }));
        let view = o.view();
        assert!(view.visible);
        assert!(!view.aria_hidden);
        assert_eq!(view.title.as_deref(), Some("Heol"));
        assert_eq!(view.carousel.mode, CarouselMode::Custom);
        assert!(!fx.iter().any(|e| matches!(e, Effect::ArmAutoplay { .. })));
    }

    #[test]
    fn native_open_at_scrolls_instantly_to_start() {
        let mut o = overlay(Environment::touch(390.0));
        let fx = o.open_at(photos(5), 3, 390.0);
        assert_eq!(o.carousel().mode(), CarouselMode::Native);
        assert_eq!(o.carousel().index(), 3);
        assert!(fx.contains(&Effect::ScrollTo {
            left: 1170.0,
            behavior: crate::store::ScrollBehavior::Instant,
        }));
    }

    #[test]
    fn image_click_toggles_full_photo_and_close_clears_it() {
        let mut o = overlay(Environment::desktop(1280.0));
        o.open(photos(2), 800.0);
        o.image_clicked(1_000.0);
        assert!(o.is_full_photo());
        o.image_clicked(2_000.0);
        assert!(!o.is_full_photo());
        o.image_clicked(3_000.0);
        o.update(OverlayMessage::Escape);
        assert!(!o.is_visible());
        assert!(!o.is_full_photo());
        assert_eq!(o.carousel().count(), 0);
    }

    #[test]
    fn single_image_flag_follows_source() {
        let mut o = overlay(Environment::desktop(1280.0));
        o.open(photos(1), 800.0);
        assert!(o.view().single_image);
        o.update(OverlayMessage::BackdropClicked);
        o.open(photos(2), 800.0);
        assert!(!o.view().single_image);
    }

    #[test]
    fn carousel_messages_are_ignored_while_hidden() {
        let mut o = overlay(Environment::desktop(1280.0));
        assert!(o.update(OverlayMessage::Carousel(CarouselMessage::Next)).is_empty());
    }
}
