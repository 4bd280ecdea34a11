//! Fetch and decode hints attached to images before they are shown.

/// Whether the loader may defer the fetch until the image nears the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LoadingHint {
    Eager,
    #[default]
    Lazy,
}

/// How the decoded bitmap should be produced relative to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecodingHint {
    Async,
    Sync,
    #[default]
    Auto,
}

/// Relative network priority for the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FetchPriority {
    High,
    Low,
    #[default]
    Auto,
}

impl FetchPriority {
    /// Convert the priority to a queue weight (higher is more urgent).
    pub fn weight(&self) -> u8 {
        match self {
            FetchPriority::High => 3,
            FetchPriority::Auto => 2,
            FetchPriority::Low => 1,
        }
    }
}

/// The full set of hints applied to one image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageHints {
    pub loading: LoadingHint,
    pub decoding: DecodingHint,
    pub fetch_priority: FetchPriority,
}

impl ImageHints {
    /// Hints for images that sit below the fold (thumbnails, later slides).
    pub const fn deferred() -> Self {
        Self {
            loading: LoadingHint::Lazy,
            decoding: DecodingHint::Async,
            fetch_priority: FetchPriority::Auto,
        }
    }

    /// Hints for images that must be ready before the first interaction.
    pub const fn warm(first: bool) -> Self {
        Self {
            loading: LoadingHint::Eager,
            decoding: DecodingHint::Async,
            fetch_priority: if first {
                FetchPriority::High
            } else {
                FetchPriority::Auto
            },
        }
    }
}
