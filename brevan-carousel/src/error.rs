use thiserror::Error;

use crate::registry::CarouselKey;

/// Errors for programmer-facing misuse of the carousel API.
///
/// Runtime degradation (missing capabilities, empty slide lists, rapid
/// repeated gestures) never produces one of these; it degrades to a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide index {index} out of range for {count} slides")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("carousel has no slides")]
    EmptyCarousel,

    #[error("no carousel registered under {0}")]
    UnknownCarousel(CarouselKey),

    #[error("carousel driver for {0} has shut down")]
    DriverClosed(CarouselKey),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
