//! Slides and slide sources.
//!
//! A [`Slide`] is one image in a carousel. Its position in the owning list is
//! its index; the display element is the renderer's business. Slide lists are
//! treated as opaque ordered sequences: nothing here inspects URL shape beyond
//! "something an image loader can fetch".

use crate::error::{ModelError, Result};

/// One image in a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub src: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alt: String,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// An ordered collection of slides plus the heading they were shown under.
///
/// Room cards carry their room name here so the overlay can reuse it as the
/// modal title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideSource {
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    pub slides: Vec<Slide>,
}

impl SlideSource {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            title: None,
            slides,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        let trimmed = title.trim();
        self.title = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Build a source from bare URLs, deriving alt text from a prefix and the
    /// 1-based position ("Galerie photo 3").
    pub fn from_urls<I, S>(urls: I, alt_prefix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slides = urls
            .into_iter()
            .enumerate()
            .map(|(i, src)| Slide::new(src, format!("{alt_prefix} {}", i + 1)))
            .collect();
        Self::new(slides)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Reject sources that cannot produce a single visible slide.
    pub fn require_non_empty(&self) -> Result<&Self> {
        if self.slides.is_empty() {
            return Err(ModelError::EmptySource(
                self.title.clone().unwrap_or_default(),
            ));
        }
        Ok(self)
    }
}
