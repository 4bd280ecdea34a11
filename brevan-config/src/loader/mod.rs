pub mod error;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::{ConfigMetadata, FileConfig, SiteConfig, SiteSettings};
use crate::util::{ENV_PREFIX, EnvMap, parse_env, string_env};
use error::ConfigLoadError;

/// Variable naming the TOML file when no path is given explicitly.
pub const CONFIG_PATH_VAR: &str = "BREVAN_CONFIG";

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: SiteConfig,
    pub metadata: ConfigMetadata,
}

/// Builder for a configuration load.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    process_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_file: None,
            process_env: true,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Ignore the process environment; only the env file (if any) applies.
    pub fn without_process_env(mut self) -> Self {
        self.process_env = false;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env = self.collect_env()?;

        let config_path = self
            .config_path
            .clone()
            .or_else(|| string_env(&env, CONFIG_PATH_VAR).map(PathBuf::from));
        let file = match &config_path {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };

        let mut carousel = file.carousel;
        let mut site = SiteSettings::from(file.site);
        let mut overrides = Vec::new();

        macro_rules! overlay {
            (some $key:literal, $slot:expr) => {
                if let Some(value) = parse_env(&env, $key)? {
                    $slot = Some(value);
                    overrides.push($key.to_string());
                }
            };
            ($key:literal, $slot:expr) => {
                if let Some(value) = parse_env(&env, $key)? {
                    $slot = value;
                    overrides.push($key.to_string());
                }
            };
        }

        overlay!(some "BREVAN_AXIS_LOCK_PX", carousel.axis_lock_px);
        overlay!(some "BREVAN_COMMIT_DISTANCE_FRACTION", carousel.commit_distance_fraction);
        overlay!(some "BREVAN_COMMIT_VELOCITY", carousel.commit_velocity);
        overlay!(some "BREVAN_FALLBACK_SLACK_MS", carousel.fallback_slack_ms);
        overlay!(some "BREVAN_AUTOPLAY_INTERVAL_MS", carousel.autoplay_interval_ms);
        overlay!(some "BREVAN_NATIVE_MAX_WIDTH_PX", carousel.native_max_width_px);
        overlay!("BREVAN_DEFAULT_LOCALE", site.default_locale);
        overlay!(some "BREVAN_LOCALE_FILE", site.preference_path);
        overlay!("BREVAN_INSTAGRAM_URL", site.social.instagram);
        overlay!("BREVAN_FACEBOOK_URL", site.social.facebook);

        info!(
            config_path = ?config_path,
            overrides = overrides.len(),
            "configuration loaded"
        );

        Ok(ConfigLoad {
            config: SiteConfig { carousel, site },
            metadata: ConfigMetadata {
                config_path,
                env_file: self.env_file.clone(),
                env_overrides: overrides,
            },
        })
    }

    /// Process variables win over the env file, as with `dotenvy::dotenv`.
    fn collect_env(&self) -> Result<EnvMap, ConfigLoadError> {
        let mut env = EnvMap::new();
        if self.process_env {
            env.extend(std::env::vars().filter(|(key, _)| key.starts_with(ENV_PREFIX)));
        }
        if let Some(path) = &self.env_file {
            let env_error = |source| ConfigLoadError::EnvFile {
                path: path.clone(),
                source,
            };
            for entry in dotenvy::from_path_iter(path).map_err(env_error)? {
                let (key, value) = entry.map_err(env_error)?;
                if key.starts_with(ENV_PREFIX) {
                    env.entry(key).or_insert(value);
                }
            }
            debug!(path = %path.display(), "env file read");
        }
        Ok(env)
    }
}

pub fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
