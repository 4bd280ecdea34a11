//! Registry of the page's carousels keyed by [`CarouselKey`].

use std::collections::HashMap;
use std::fmt;

use brevan_model::{Room, SlideSource, hero_slides};
use tracing::debug;

use crate::carousel::{Carousel, CarouselOptions};
use crate::environment::EnvironmentProbe;
use crate::error::{CarouselError, Result};
use crate::messages::{CarouselMessage, Effect};
use crate::runtime_config::CarouselTuning;

/// Unique key for each carousel on a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CarouselKey {
    Hero,
    /// Room card, by room slug.
    Room(String),
    RoomOverlay,
    GalleryOverlay,
}

impl CarouselKey {
    pub fn room(slug: impl Into<String>) -> Self {
        CarouselKey::Room(slug.into())
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, CarouselKey::RoomOverlay | CarouselKey::GalleryOverlay)
    }
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselKey::Hero => f.write_str("hero"),
            CarouselKey::Room(slug) => write!(f, "room:{slug}"),
            CarouselKey::RoomOverlay => f.write_str("overlay:room"),
            CarouselKey::GalleryOverlay => f.write_str("overlay:gallery"),
        }
    }
}

#[derive(Debug, Default)]
pub struct CarouselRegistry {
    carousels: HashMap<CarouselKey, Carousel>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hero banner plus one card carousel per room, all autoplaying.
    ///
    /// `heading` supplies each room card's rendered title.
    pub fn for_home_page<P, F>(
        probe: &P,
        tuning: CarouselTuning,
        width: f32,
        rooms: &[Room],
        heading: F,
    ) -> Self
    where
        P: EnvironmentProbe + ?Sized,
        F: Fn(&Room) -> String,
    {
        let options = CarouselOptions::probed(probe, tuning)
            .with_autoplay(true)
            .with_width(width);
        let mut registry = Self::new();
        registry.insert(Carousel::new(
            CarouselKey::Hero,
            SlideSource::new(hero_slides()),
            options,
        ));
        for room in rooms {
            registry.insert(Carousel::new(
                CarouselKey::room(room.slug),
                room.slide_source(&heading(room)),
                options,
            ));
        }
        registry
    }

    /// Register a carousel, replacing any previous one under the same key.
    pub fn insert(&mut self, carousel: Carousel) -> Option<Carousel> {
        let key = carousel.key().clone();
        debug!(%key, count = carousel.count(), "carousel registered");
        self.carousels.insert(key, carousel)
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&Carousel> {
        self.carousels.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel> {
        self.carousels.get_mut(key)
    }

    pub fn remove(&mut self, key: &CarouselKey) -> Option<Carousel> {
        self.carousels.remove(key)
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Keys in a stable order.
    pub fn keys(&self) -> Vec<CarouselKey> {
        let mut keys: Vec<_> = self.carousels.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn update(
        &mut self,
        key: &CarouselKey,
        message: CarouselMessage,
    ) -> Result<Vec<Effect>> {
        let carousel = self
            .carousels
            .get_mut(key)
            .ok_or_else(|| CarouselError::UnknownCarousel(key.clone()))?;
        Ok(carousel.update(message))
    }

    /// Start every carousel, returning effects per key.
    pub fn start_all(&mut self) -> Vec<(CarouselKey, Vec<Effect>)> {
        let mut started: Vec<_> = self
            .carousels
            .iter_mut()
            .map(|(key, carousel)| (key.clone(), carousel.start()))
            .collect();
        started.sort_by(|a, b| a.0.cmp(&b.0));
        started
    }
}

#[cfg(test)]
mod tests {
    use brevan_model::rooms;

    use super::*;
    use crate::environment::Environment;
    use crate::store::CarouselMode;

    fn home(env: Environment) -> CarouselRegistry {
        CarouselRegistry::for_home_page(
            &env,
            CarouselTuning::default(),
            800.0,
            rooms(),
            |room| room.name.to_string(),
        )
    }

    #[test]
    fn home_page_has_hero_and_room_cards() {
        let registry = home(Environment::desktop(1280.0));
        assert_eq!(registry.len(), 1 + rooms().len());
        let hero = registry.get(&CarouselKey::Hero).expect("hero");
        assert_eq!(hero.mode(), CarouselMode::Custom);
        assert!(hero.autoplay().is_enabled());
        let card = registry.get(&CarouselKey::room("heol")).expect("card");
        assert_eq!(card.title(), Some("Heol"));
    }

    #[test]
    fn narrow_touch_pages_use_native_mode() {
        let registry = home(Environment::touch(390.0));
        assert!(
            registry
                .keys()
                .iter()
                .all(|k| registry.get(k).map(|c| c.mode()) == Some(CarouselMode::Native))
        );
    }

    #[test]
    fn unknown_keys_are_errors() {
        let mut registry = CarouselRegistry::new();
        let err = registry
            .update(&CarouselKey::Hero, CarouselMessage::Next)
            .unwrap_err();
        assert_eq!(err, CarouselError::UnknownCarousel(CarouselKey::Hero));
        assert_eq!(err.to_string(), "no carousel registered under hero");
    }

    #[test]
    fn start_all_is_ordered_by_key() {
        let mut registry = home(Environment::desktop(1280.0));
        let started = registry.start_all();
        assert_eq!(started[0].0, CarouselKey::Hero);
        assert!(started.iter().all(|(_, fx)| fx.contains(&Effect::Render)));
    }
}
