//! Small standalone checks used by forms and the server.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static INDIAN_MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("valid mobile regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Parses a number the way a form field is read: surrounding whitespace is
/// ignored and the value must be finite.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

pub fn is_valid_positive_number(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n > 0.0)
}

/// Reads an ISO date (`2030-01-31`, midnight UTC) or an RFC 3339 timestamp.
pub(crate) fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `true` only when the value parses and lies strictly after `now`.
pub fn is_future_date(value: &str, now: DateTime<Utc>) -> bool {
    parse_instant(value).is_some_and(|instant| instant > now)
}

/// Strips everything except digits and dots, keeping at most one dot.
///
/// `"₹1,25,000.50"` becomes `"125000.50"`.
pub fn sanitize_currency_input(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = cleaned.split('.');
    let whole = parts.next().unwrap_or_default();
    match (parts.next(), parts.next()) {
        (Some(fraction), Some(_)) => format!("{}.{}", whole, fraction),
        _ => cleaned,
    }
}

/// Ten digits starting with 6-9.
pub fn validate_indian_mobile(mobile: &str) -> bool {
    INDIAN_MOBILE_RE.is_match(mobile)
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
