//! Parsing and formatting for money, percentage, and duration inputs.
//!
//! Form submissions use the strict parsers (blank, non-numeric, negative, and
//! non-finite inputs are rejected). Live previews such as the invoice total
//! use [`lenient_amount`], which reads anything unusable as zero.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use crate::state::ActionError;

/// Parse a non-negative, finite decimal amount.
///
/// # Errors
///
/// Returns `InvalidNumber` naming `field` when `raw` is not such a number.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<f64, ActionError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| ActionError::InvalidNumber { field, value: raw.to_owned() })
}

/// Parse a non-negative whole number (prices in dollars, durations in minutes).
///
/// # Errors
///
/// Returns `InvalidNumber` naming `field` when `raw` is not such a number.
pub fn parse_whole(field: &'static str, raw: &str) -> Result<u32, ActionError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ActionError::InvalidNumber { field, value: raw.to_owned() })
}

/// Amount for live previews: unusable input counts as zero.
#[must_use]
pub fn lenient_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Round to whole cents, ties away from zero (`0.125` becomes `0.13`).
///
/// `{:.2}` alone rounds exact binary ties to even, which would print `0.12`.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two-decimal dollar string, e.g. `$80.00`.
#[must_use]
pub fn format_money(value: f64) -> String {
    format!("${:.2}", round_cents(value))
}

/// Two-decimal amount prefixed by a currency code, e.g. `LKR 19.88`.
#[must_use]
pub fn format_with_currency(code: &str, value: f64) -> String {
    format!("{code} {:.2}", round_cents(value))
}
