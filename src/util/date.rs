//! Date display helpers for request cards and the service-date input.
//!
//! The API returns `createdAt` as an RFC 3339 timestamp and `preferredDate`
//! either as a plain `YYYY-MM-DD` date or a full timestamp, depending on which
//! client wrote it.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDate};

/// Placeholder shown when a date is missing or unparseable.
pub const MISSING_DATE: &str = "N/A";

/// Parse either an RFC 3339 timestamp or a bare ISO date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Card display form (`5/1/2024`), or [`MISSING_DATE`].
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map_or_else(|| MISSING_DATE.to_owned(), |d| d.format("%-m/%-d/%Y").to_string())
}

/// Value for an `<input type="date">` (`YYYY-MM-DD`); empty when absent.
pub fn input_date_value(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
