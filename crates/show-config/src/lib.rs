//! # show-config
//!
//! Layered configuration loading for Showcase using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SHOWCASE_*` prefix, `__` as separator)
//! 2. Project-level `.showcase/config.toml`
//! 3. User-level `~/.config/showcase/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SHOWCASE_GITHUB__USERNAME` -> `github.username`,
//! `SHOWCASE_OWNER__NAME` -> `owner.name`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! Resolution never fails on configuration: [`ShowConfig::load_or_default`]
//! degrades a malformed config to built-in defaults with a logged warning.

mod error;
mod fetch;
mod github;
mod owner;
pub mod paths;

pub use error::ConfigError;
pub use fetch::FetchConfig;
pub use github::{GithubConfig, TlsMode};
pub use owner::OwnerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShowConfig {
    #[serde(default)]
    pub owner: OwnerConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl ShowConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables), with the project-local layer read from `root`.
    ///
    /// Does NOT call `dotenvy` -- use [`ShowConfig::load_with_dotenv`] if
    /// you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a config file or environment variable
    /// cannot be deserialized into the config shape.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::figment(root).extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical
    /// entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a config file or environment variable
    /// cannot be deserialized into the config shape.
    pub fn load_with_dotenv(root: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(root)
    }

    /// Load configuration, degrading to built-in defaults on failure.
    ///
    /// A missing config is simply the default layer; a malformed one logs a
    /// warning and yields the defaults, so project resolution can always
    /// proceed.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        Self::load_with_dotenv(root).unwrap_or_else(|error| {
            tracing::warn!(%error, "malformed configuration, using built-in defaults");
            Self::default()
        })
    }

    /// Build the figment provider chain, rooting the project-local layer
    /// at `root`. An explicit `--project` override must reach this layer,
    /// or the cache and projects directory would follow one root while the
    /// config follows the process cwd.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = paths::local_config(root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SHOWCASE_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("showcase").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ShowConfig::default();
        assert!(!config.github.is_remote());
        assert_eq!(config.github.cache_ttl_minutes, 30);
        assert_eq!(config.fetch.max_attempts, 3);
        assert_eq!(config.fetch.timeout_secs, 15);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = ShowConfig::figment(Path::new("/nonexistent/showcase-root"));
        let config: ShowConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.owner.name, "Showcase");
        assert_eq!(config.github.tls, TlsMode::Strict);
    }
}
