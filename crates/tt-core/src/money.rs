//! Fixed-point money amounts.
//!
//! Amounts are stored as integer minor units (cents) alongside an ISO 4217
//! currency code. The textual form is `"<CCY> <amount>"`, e.g. `"USD 50.00"`.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A monetary amount in minor units of a currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Money {
    /// Amount in minor units (cents for USD).
    pub amount_cents: i64,
    /// Three-letter uppercase currency code.
    pub currency: String,
}

impl Money {
    /// Build an amount from minor units.
    #[must_use]
    pub fn from_cents(currency: &str, amount_cents: i64) -> Self {
        Self {
            amount_cents,
            currency: currency.to_string(),
        }
    }

    /// Amount in major units as a float, for wire formats that expect a JSON number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_major_units(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        write!(f, "{} {sign}{}.{:02}", self.currency, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = CoreError;

    /// Parse `"USD 50.00"`, `"USD 50"` or `"USD 1.5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::Validation(format!("invalid money '{s}': {reason}"));

        let (currency, amount) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| invalid("expected '<CCY> <amount>'"))?;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(invalid("currency must be a 3-letter uppercase code"));
        }

        let amount = amount.trim();
        let (negative, digits) = match amount.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, amount),
        };
        let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));
        if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("amount must be numeric"));
        }
        if minor.len() > 2 || !minor.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let major: i64 = major.parse().map_err(|_| invalid("amount out of range"))?;
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => minor.parse().map_err(|_| invalid("bad fraction"))?,
        };
        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount out of range"))?;

        Ok(Self {
            amount_cents: if negative { -cents } else { cents },
            currency: currency.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("USD 50.00", 5000)]
    #[case("USD 50", 5000)]
    #[case("USD 1", 100)]
    #[case("USD 1.5", 150)]
    #[case("USD 100.00", 10000)]
    #[case("EUR -3.25", -325)]
    fn parses_valid_amounts(#[case] input: &str, #[case] cents: i64) {
        let money: Money = input.parse().unwrap();
        assert_eq!(money.amount_cents, cents);
    }

    #[rstest]
    #[case("50.00")]
    #[case("usd 50.00")]
    #[case("USD fifty")]
    #[case("USD 1.005")]
    #[case("USD .50")]
    fn rejects_invalid_amounts(#[case] input: &str) {
        assert!(input.parse::<Money>().is_err(), "{input} should not parse");
    }

    #[test]
    fn display_pads_cents() {
        assert_eq!(Money::from_cents("USD", 5000).to_string(), "USD 50.00");
        assert_eq!(Money::from_cents("USD", 105).to_string(), "USD 1.05");
        assert_eq!(Money::from_cents("USD", -5).to_string(), "USD -0.05");
    }

    #[test]
    fn major_units() {
        let money: Money = "USD 100.00".parse().unwrap();
        assert!((money.as_major_units() - 100.0).abs() < f64::EPSILON);
    }
}
