//! Photo gallery manifest.
//!
//! The gallery folder holds numbered photos `gallery-01.jpg` ..
//! `gallery-99.jpg` with gaps; the manifest skips the gaps so no thumbnail
//! points at a missing file.

use crate::image::ImageHints;
use crate::slide::{Slide, SlideSource};

/// Highest photo number in the gallery folder.
pub const GALLERY_PHOTO_COUNT: u32 = 99;

/// 1-based photo numbers that do not exist on disk.
pub const MISSING_PHOTOS: [u32; 26] = [
    1, 2, 3, 7, 9, 18, 19, 30, 32, 36, 40, 41, 49, 50, 57, 65, 74, 75, 77, 79,
    84, 85, 86, 88, 98, 99,
];

/// Masonry tile shape, cycled over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GalleryTile {
    Big,
    Tall,
    Wide,
    Regular,
}

impl GalleryTile {
    const PATTERN: [GalleryTile; 8] = [
        GalleryTile::Big,
        GalleryTile::Tall,
        GalleryTile::Wide,
        GalleryTile::Regular,
        GalleryTile::Regular,
        GalleryTile::Wide,
        GalleryTile::Tall,
        GalleryTile::Big,
    ];

    pub fn for_position(position: usize) -> Self {
        Self::PATTERN[position % Self::PATTERN.len()]
    }

    /// Extra CSS class for the tile, if any.
    pub const fn class(self) -> Option<&'static str> {
        match self {
            GalleryTile::Big => Some("big"),
            GalleryTile::Tall => Some("tall"),
            GalleryTile::Wide => Some("wide"),
            GalleryTile::Regular => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GalleryItem {
    /// Position in the grid (and in the overlay).
    pub index: usize,
    pub number: u32,
    pub slide: Slide,
    pub tile: GalleryTile,
    pub thumbnail_hints: ImageHints,
}

pub fn gallery_manifest() -> Vec<GalleryItem> {
    (1..=GALLERY_PHOTO_COUNT)
        .filter(|n| !MISSING_PHOTOS.contains(n))
        .enumerate()
        .map(|(index, number)| GalleryItem {
            index,
            number,
            slide: Slide::new(
                format!("assets/images/gallery/gallery-{number:02}.jpg"),
                format!("Photo {number}"),
            ),
            tile: GalleryTile::for_position(index),
            thumbnail_hints: ImageHints::deferred(),
        })
        .collect()
}

/// The overlay's slide list. Alt text follows the overlay's own numbering.
pub fn gallery_source(items: &[GalleryItem]) -> SlideSource {
    SlideSource::from_urls(
        items.iter().map(|item| item.slide.src.clone()),
        "Galerie photo",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_skips_missing_photos() {
        let items = gallery_manifest();
        assert_eq!(items.len(), 73);
        assert_eq!(items[0].number, 4);
        assert_eq!(items[0].slide.src, "assets/images/gallery/gallery-04.jpg");
        assert!(items.iter().all(|i| !MISSING_PHOTOS.contains(&i.number)));
        assert!(items.iter().enumerate().all(|(pos, i)| i.index == pos));
    }

    #[test]
    fn tiles_cycle_through_the_masonry_pattern() {
        let items = gallery_manifest();
        assert_eq!(items[0].tile, GalleryTile::Big);
        assert_eq!(items[3].tile, GalleryTile::Regular);
        assert_eq!(items[7].tile, GalleryTile::Big);
        assert_eq!(items[8].tile, GalleryTile::Big);
        assert_eq!(items[9].tile.class(), Some("tall"));
    }

    #[test]
    fn overlay_source_matches_manifest_order() {
        let items = gallery_manifest();
        let source = gallery_source(&items);
        assert_eq!(source.len(), items.len());
        assert_eq!(source.slides[2].src, items[2].slide.src);
        assert_eq!(source.slides[2].alt, "Galerie photo 3");
    }
}
