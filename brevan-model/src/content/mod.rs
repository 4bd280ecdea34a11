//! Static site content: hero images, room catalogue and the photo gallery.
//!
//! Carousels treat all of this as opaque ordered slide lists.

pub mod gallery;
pub mod hero;
pub mod rooms;
