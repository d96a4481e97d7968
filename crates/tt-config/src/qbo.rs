//! QuickBooks Online API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const SANDBOX_BASE_URL: &str = "https://sandbox-quickbooks.api.intuit.com";
pub const PRODUCTION_BASE_URL: &str = "https://quickbooks.api.intuit.com";

fn default_base_url() -> String {
    SANDBOX_BASE_URL.to_string()
}

const fn default_minor_version() -> u32 {
    65
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QboConfig {
    /// API host, without the `/v3` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `minorversion` query parameter sent with every request.
    #[serde(default = "default_minor_version")]
    pub minor_version: u32,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for QboConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            minor_version: default_minor_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl QboConfig {
    /// Whether requests go to the Intuit sandbox rather than production.
    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        self.base_url.contains("sandbox")
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject values the HTTP client cannot use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a non-HTTP base URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "qbo.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "qbo.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_sandbox() {
        let config = QboConfig::default();
        assert!(config.is_sandbox());
        assert_eq!(config.minor_version, 65);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn api_root_strips_trailing_slash() {
        let config = QboConfig {
            base_url: format!("{PRODUCTION_BASE_URL}/"),
            ..Default::default()
        };
        assert_eq!(config.api_root(), PRODUCTION_BASE_URL);
        assert!(!config.is_sandbox());
    }

    #[test]
    fn validate_rejects_bad_url() {
        let config = QboConfig {
            base_url: "quickbooks.example".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "qbo.base_url"
        ));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = QboConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
