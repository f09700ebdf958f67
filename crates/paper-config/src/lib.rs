//! # paper-config
//!
//! Layered configuration loading for pax using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PAX_*` prefix, `__` as separator)
//! 2. Project-level `.pax/config.toml`
//! 3. User-level `~/.config/pax/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PAX_BACKEND__BASE_URL` -> `backend.base_url`,
//! `PAX_GENERAL__DEFAULT_SOURCE` -> `general.default_source`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use paper_config::PaxConfig;
//!
//! let config = PaxConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.backend.base_url());
//! ```

mod backend;
mod error;
mod general;
mod history;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use history::HistoryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of environment variables read by [`PaxConfig::figment`].
pub const ENV_PREFIX: &str = "PAX_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PaxConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PaxConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".pax/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pax").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = PaxConfig::default();
        assert_eq!(config.backend.base_url(), "http://localhost:8000");
        assert!(config.history.path.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PaxConfig = PaxConfig::figment().extract()?;
            assert_eq!(config.general.default_max_results.count(), 10);
            assert_eq!(config.backend.timeout_secs, 300);
            Ok(())
        });
    }
}
