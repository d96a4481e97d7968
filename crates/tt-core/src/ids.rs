//! Local ID prefixes.
//!
//! Local IDs have the form `{prefix}-{8 hex chars}`, e.g. `emp-a3f8b2c1`.
//! The random part is generated by the database (see `tt-db`).

pub const PREFIX_APP_INFO: &str = "app";
pub const PREFIX_COMPANY: &str = "cmp";
pub const PREFIX_EMPLOYEE: &str = "emp";
pub const PREFIX_CUSTOMER: &str = "cus";
pub const PREFIX_SERVICE_ITEM: &str = "itm";
pub const PREFIX_TIME_ACTIVITY: &str = "tac";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_APP_INFO,
    PREFIX_COMPANY,
    PREFIX_EMPLOYEE,
    PREFIX_CUSTOMER,
    PREFIX_SERVICE_ITEM,
    PREFIX_TIME_ACTIVITY,
];

/// Format a local ID from a prefix and its random suffix.
#[must_use]
pub fn format_id(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}

/// Return the prefix part of a local ID, if it has one.
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    id.split_once('-').map(|(prefix, _)| prefix)
}
