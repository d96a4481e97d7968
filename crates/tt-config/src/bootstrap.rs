//! OAuth application credentials bootstrap file.
//!
//! The file is read once, at first start, and looks like:
//!
//! ```json
//! {
//!   "appInfo": {
//!     "appToken": "...",
//!     "consumerKey": "...",
//!     "consumerSecret": "..."
//!   }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthBootstrap {
    pub app_info: AppCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCredentials {
    pub app_token: String,
    pub consumer_key: String,
    pub consumer_secret: String,
}

impl OAuthBootstrap {
    /// Parse the bootstrap document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json::Error` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse the bootstrap file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::BootstrapIo` if the file cannot be read and
    /// `ConfigError::BootstrapFormat` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::BootstrapIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| ConfigError::BootstrapFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}
