//! Database error types for tt-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned unparseable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// No row exists with the given ID.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Invalid state encountered (e.g., conflicting remote ID).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The OAuth bootstrap file could not be loaded.
    #[error(transparent)]
    Bootstrap(#[from] tt_config::ConfigError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
