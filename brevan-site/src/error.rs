use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("translation dictionary is malformed: {0}")]
    Dictionary(#[source] serde_json::Error),

    #[error("translation dictionary has no table for the default locale `{0}`")]
    MissingDefaultTable(&'static str),

    #[error("failed to access locale preference at {path}: {source}")]
    PreferenceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("locale preference at {path} is malformed: {source}")]
    PreferenceFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no per-user configuration directory is available")]
    NoPreferenceDir,
}

pub type Result<T> = std::result::Result<T, SiteError>;
