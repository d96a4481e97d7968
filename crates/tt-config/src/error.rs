//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// The OAuth bootstrap file could not be read.
    #[error("Failed to read OAuth bootstrap file {}: {source}", path.display())]
    BootstrapIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OAuth bootstrap file is not valid JSON or is missing fields.
    #[error("Invalid OAuth bootstrap file {}: {source}", path.display())]
    BootstrapFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
