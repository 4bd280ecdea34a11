use std::path::PathBuf;

use brevan_carousel::{CarouselTuning, RuntimeConfig};
use brevan_model::Locale;
use brevan_site::{FileLocaleStore, SiteError, SocialLinks};
use serde::{Deserialize, Serialize};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub carousel: RuntimeConfig,
    pub site: FileSiteConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub carousel: RuntimeConfig,
    pub site: SiteSettings,
}

impl SiteConfig {
    pub fn tuning(&self) -> CarouselTuning {
        CarouselTuning::from_runtime_config(&self.carousel)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSettings {
    pub default_locale: Locale,
    /// Locale preference file; `None` uses the per-user config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_path: Option<PathBuf>,
    pub social: SocialLinks,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            preference_path: None,
            social: SocialLinks::default(),
        }
    }
}

impl SiteSettings {
    pub fn preference_store(&self) -> Result<FileLocaleStore, SiteError> {
        match &self.preference_path {
            Some(path) => Ok(FileLocaleStore::new(path)),
            None => FileLocaleStore::in_config_dir(),
        }
    }
}

impl From<FileSiteConfig> for SiteSettings {
    fn from(file: FileSiteConfig) -> Self {
        Self {
            default_locale: file.default_locale.unwrap_or_default(),
            preference_path: file.preference_path,
            social: file.social.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Environment variables that overrode a file or default value.
    pub env_overrides: Vec<String>,
}
