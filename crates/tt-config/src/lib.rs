//! # tt-config
//!
//! Layered configuration loading for timetrack using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TIMETRACK_*` prefix, `__` as separator)
//! 2. Project-level `.timetrack/config.toml`
//! 3. User-level `~/.config/timetrack/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TIMETRACK_QBO__BASE_URL` -> `qbo.base_url`,
//! `TIMETRACK_DATABASE__PATH` -> `database.path`, etc.
//!
//! The OAuth application credentials are not part of the layered config; they
//! come from a one-time bootstrap file (see [`OAuthBootstrap`]).

mod bootstrap;
mod database;
mod error;
mod general;
mod qbo;

pub use bootstrap::{AppCredentials, OAuthBootstrap};
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use qbo::{PRODUCTION_BASE_URL, QboConfig, SANDBOX_BASE_URL};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory holding project-local state and config.
pub const PROJECT_DIR: &str = ".timetrack";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TtConfig {
    #[serde(default)]
    pub qbo: QboConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TtConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` handling belongs to the binary, which loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.qbo.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TIMETRACK_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("timetrack").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TtConfig::default();
        assert!(config.qbo.is_sandbox());
        assert_eq!(config.database.path, ".timetrack/timetrack.db");
        assert_eq!(config.general.oauth_file, "oauth.json");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: TtConfig = TtConfig::figment().extract()?;
            assert_eq!(config.general.default_limit, 50);
            assert_eq!(config.qbo.minor_version, 65);
            Ok(())
        });
    }
}
