//! Room catalogue.

use crate::error::{ModelError, Result};
use crate::slide::{Slide, SlideSource};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Room {
    pub slug: &'static str,
    /// Translation key of the display name (`room.<slug>.name`).
    pub name_key: &'static str,
    /// Name shown before translations are applied.
    pub name: &'static str,
    pub price_from_eur: u16,
    pub size_m2: u8,
    pub images: &'static [&'static str],
}

impl Room {
    /// The room card's photo strip, titled with `heading` (usually the
    /// translated room name as currently rendered).
    pub fn slide_source(&self, heading: &str) -> SlideSource {
        let slides = self
            .images
            .iter()
            .enumerate()
            .map(|(i, src)| Slide::new(*src, format!("{} {}", self.name, i + 1)))
            .collect();
        SlideSource::new(slides).with_title(heading)
    }
}

const ROOMS: [Room; 5] = [
    Room {
        slug: "brevan",
        name_key: "room.brevan.name",
        name: "Suite Brévan",
        price_from_eur: 110,
        size_m2: 25,
        images: &[
            "/images/chambres/cheminee-01.jpg",
            "/images/chambres/cheminee-02.jpg",
            "/images/chambres/cheminee-03.jpg",
        ],
    },
    Room {
        slug: "aulne",
        name_key: "room.aulne.name",
        name: "L’Aulne",
        price_from_eur: 110,
        size_m2: 25,
        images: &[
            "/images/chambres/baignoire-01.jpg",
            "/images/chambres/baignoire-02.jpg",
            "/images/chambres/baignoire-03.jpg",
        ],
    },
    Room {
        slug: "havel",
        name_key: "room.havel.name",
        name: "Havel",
        price_from_eur: 100,
        size_m2: 20,
        images: &[
            "/images/chambres/pierres-bleues-01.jpg",
            "/images/chambres/pierres-bleues-02.jpg",
            "/images/chambres/pierres-bleues-03.jpg",
        ],
    },
    Room {
        slug: "heol",
        name_key: "room.heol.name",
        name: "Heol",
        price_from_eur: 90,
        size_m2: 18,
        images: &[
            "/images/chambres/ensoleillee-01.jpg",
            "/images/chambres/ensoleillee-02.jpg",
            "/images/chambres/ensoleillee-03.jpg",
        ],
    },
    Room {
        slug: "linenn",
        name_key: "room.linenn.name",
        name: "Linenn",
        price_from_eur: 90,
        size_m2: 16,
        images: &[
            "/images/chambres/petite-01.jpg",
            "/images/chambres/petite-02.jpg",
            "/images/chambres/petite-03.jpg",
        ],
    },
];

pub fn rooms() -> &'static [Room] {
    &ROOMS
}

pub fn room_by_slug(slug: &str) -> Result<&'static Room> {
    ROOMS
        .iter()
        .find(|room| room.slug == slug)
        .ok_or_else(|| ModelError::UnknownRoom(slug.to_string()))
}
