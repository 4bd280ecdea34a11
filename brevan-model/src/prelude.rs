//! UI focused snapshot of the types surface.
//! Prefer importing from this module when wiring carousels or page scripts.

pub use super::content::gallery::{GalleryItem, GalleryTile};
pub use super::content::rooms::Room;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::image::{DecodingHint, FetchPriority, ImageHints, LoadingHint};
pub use super::locale::Locale;
pub use super::slide::{Slide, SlideSource};
