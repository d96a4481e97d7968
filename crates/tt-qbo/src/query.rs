//! QBO query-language statements used for name-based lookups.
//!
//! Literals are single-quoted; quotes and backslashes inside them are
//! backslash-escaped.

/// The income account new service items are booked against.
pub const INCOME_ACCOUNT_QUERY: &str =
    "select * from account where accounttype = 'Income' and accountsubtype = 'ServiceFeeIncome'";

/// Escape a value for use inside a single-quoted query literal.
#[must_use]
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[must_use]
pub fn employee_by_name(first_name: &str, last_name: &str) -> String {
    person_by_name("Employee", first_name, last_name)
}

#[must_use]
pub fn customer_by_name(first_name: &str, last_name: &str) -> String {
    person_by_name("Customer", first_name, last_name)
}

#[must_use]
pub fn item_by_name(name: &str) -> String {
    format!("select * from Item where Name = '{}'", escape_literal(name))
}

fn person_by_name(entity: &str, first_name: &str, last_name: &str) -> String {
    format!(
        "select * from {entity} where GivenName = '{}' and FamilyName = '{}'",
        escape_literal(first_name),
        escape_literal(last_name)
    )
}
