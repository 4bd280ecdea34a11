//! Locale preference persistence.
//!
//! The selected locale is the only thing the site remembers between visits.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SiteError};

pub trait LocalePreferenceStore {
    /// Raw stored code, if any. Unknown codes are passed through; callers
    /// decide how to fall back.
    fn load(&self) -> Result<Option<String>>;

    fn save(&mut self, code: &str) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    lang: String,
}

/// JSON file under the per-user configuration directory.
#[derive(Debug, Clone)]
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/brevan/locale.json`
    pub fn in_config_dir() -> Result<Self> {
        let dir = dirs::config_dir().ok_or(SiteError::NoPreferenceDir)?;
        Ok(Self::new(dir.join("brevan").join("locale.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SiteError {
        SiteError::PreferenceIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl LocalePreferenceStore for FileLocaleStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let stored: StoredPreference = serde_json::from_str(&content)
            .map_err(|source| SiteError::PreferenceFormat {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(stored.lang))
    }

    fn save(&mut self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(&StoredPreference {
            lang: code.to_string(),
        })
        .map_err(|source| SiteError::PreferenceFormat {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), code, "locale preference saved");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLocaleStore {
    value: Option<String>,
}

impl MemoryLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: impl Into<String>) -> Self {
        Self {
            value: Some(code.into()),
        }
    }
}

impl LocalePreferenceStore for MemoryLocaleStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, code: &str) -> Result<()> {
        self.value = Some(code.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryLocaleStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save("de").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("de"));
    }
}
