//! Core data model definitions shared across Brevan crates.
#![allow(missing_docs)]

pub mod content;
pub mod error;
pub mod image;
pub mod locale;
pub mod prelude;
pub mod slide;

// Intentionally curated re-exports for downstream consumers.
pub use content::gallery::{
    GalleryItem, GalleryTile, gallery_manifest, gallery_source,
};
pub use content::hero::hero_slides;
pub use content::rooms::{Room, room_by_slug, rooms};
pub use error::{ModelError, Result as ModelResult};
pub use image::{DecodingHint, FetchPriority, ImageHints, LoadingHint};
pub use locale::Locale;
pub use slide::{Slide, SlideSource};
