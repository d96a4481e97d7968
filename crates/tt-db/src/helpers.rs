//! Row parsing and shared SQL helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DatabaseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column holding a calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Format a calendar date for storage.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a non-negative INTEGER column as `u32`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the value is negative or too large.
pub fn get_u32(row: &libsql::Row, idx: i32) -> Result<u32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u32::try_from(raw)
        .map_err(|_| DatabaseError::Query(format!("column {idx}: {raw} is not a valid u32")))
}

/// Run a `SELECT COUNT(*) ...` query and return the count.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn count(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<u64, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let n = row.get::<i64>(0)?;
    u64::try_from(n).map_err(|_| DatabaseError::Query(format!("negative count {n}")))
}

/// Record a remote QBO ID on a row, at most once.
///
/// Writing the same ID again is a no-op. Writing a different ID over an
/// existing one is rejected with `DatabaseError::InvalidState`.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no row has `id`, or
/// `DatabaseError::InvalidState` on a conflicting ID.
pub async fn set_qbo_id_once(
    conn: &libsql::Connection,
    table: &'static str,
    entity_type: &'static str,
    id: &str,
    qbo_id: &str,
) -> Result<(), DatabaseError> {
    let changed = conn
        .execute(
            &format!("UPDATE {table} SET qbo_id = ?2 WHERE id = ?1 AND qbo_id IS NULL"),
            libsql::params![id, qbo_id],
        )
        .await?;
    if changed > 0 {
        return Ok(());
    }

    let mut rows = conn
        .query(&format!("SELECT qbo_id FROM {table} WHERE id = ?1"), [id])
        .await?;
    let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
        entity_type,
        id: id.to_string(),
    })?;
    match get_opt_string(&row, 0)? {
        Some(existing) if existing == qbo_id => Ok(()),
        Some(existing) => Err(DatabaseError::InvalidState(format!(
            "{entity_type} {id} is already linked to QBO id {existing}, refusing {qbo_id}"
        ))),
        None => Err(DatabaseError::InvalidState(format!(
            "{entity_type} {id}: qbo_id update was not applied"
        ))),
    }
}

/// Build the `LIMIT` clause for list queries. `None` means unbounded.
#[must_use]
pub fn limit_clause(limit: Option<u32>) -> String {
    limit.map_or_else(String::new, |n| format!(" LIMIT {n}"))
}
