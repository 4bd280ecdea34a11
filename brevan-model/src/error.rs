use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("slide source is empty: {0}")]
    EmptySource(String),

    #[error("unknown locale code: {0}")]
    UnknownLocale(String),

    #[error("unknown room slug: {0}")]
    UnknownRoom(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
