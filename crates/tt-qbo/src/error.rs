//! QBO client and sync gateway error types.

use thiserror::Error;
use tt_db::error::DatabaseError;

/// Errors from talking to QuickBooks Online or syncing entities to it.
#[derive(Debug, Error)]
pub enum QboError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// QBO returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Fault body or response text.
        message: String,
    },

    /// QBO returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// A response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The company has no realm ID or access token.
    #[error("company {company_id} is not connected to QuickBooks Online")]
    NotConnected { company_id: String },

    /// No income account to attach new service items to.
    #[error("Could not find an account of type Income and subtype ServiceFeeIncome")]
    IncomeAccountNotFound,

    /// QBO accepted a create but the returned object carries no `Id`.
    #[error("QBO returned a {entity} without an Id")]
    MissingRemoteId { entity: &'static str },

    /// Local persistence failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
