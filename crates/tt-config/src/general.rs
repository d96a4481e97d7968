//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_oauth_file() -> String {
    "oauth.json".to_string()
}

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path of the OAuth bootstrap file, relative to the working directory.
    #[serde(default = "default_oauth_file")]
    pub oauth_file: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            oauth_file: default_oauth_file(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.oauth_file, "oauth.json");
        assert_eq!(config.default_limit, 50);
    }
}
