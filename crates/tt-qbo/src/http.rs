//! Shared HTTP response checks for the QBO client.
//!
//! 429 becomes [`QboError::RateLimited`] (with `Retry-After` parsing, 60 s
//! fallback); any other non-success status becomes [`QboError::Api`] carrying
//! the response body, which for QBO is a `Fault` document.

use crate::error::QboError;

/// Return the response unchanged on success, or the matching error.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, QboError> {
    if resp.status() == 429 {
        return Err(QboError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(QboError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
