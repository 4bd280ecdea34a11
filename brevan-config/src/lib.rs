//! Configuration for La Maison Brevan.
//!
//! Carousel tunables and site settings come from an optional TOML file and
//! `BREVAN_*` environment variables (process environment or a `.env`
//! file), with the environment taking precedence. The `brevan` binary
//! prints the resolved configuration and exposes the static content and
//! translation tables for inspection.

pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{ConfigMetadata, FileConfig, FileSiteConfig, SiteConfig, SiteSettings};
