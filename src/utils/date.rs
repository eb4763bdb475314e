//! Timestamp parsing and formatting.
//!
//! The database stores every timestamp as `YYYY-MM-DD HH:MM:SS`. Operators
//! type and read them in the Dutch order `dd-mm-yyyy HH:MM`.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Canonical storage format.
pub const ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Operator input/display format.
pub const DUTCH_FORMAT: &str = "%d-%m-%Y %H:%M";
/// Date-only operator format used by search.
pub const DUTCH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Formats accepted by the legacy normalizer, tried in order.
const LEGACY_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d-%m-%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
];

pub fn parse_dutch_datetime(value: &str) -> AppResult<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidDate("missing date value".into()));
    }
    NaiveDateTime::parse_from_str(value, DUTCH_FORMAT).map_err(|_| {
        AppError::InvalidDate(format!("'{}' (use dd-mm-yyyy HH:MM)", value))
    })
}

pub fn datetime_to_iso(dt: &NaiveDateTime) -> String {
    dt.format(ISO_FORMAT).to_string()
}

/// Parse an optional operator timestamp straight into storage format.
/// Blank input means "no value".
pub fn parse_dutch_to_iso(value: Option<&str>) -> AppResult<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_dutch_datetime(v).map(|dt| Some(datetime_to_iso(&dt))),
    }
}

pub fn current_iso_timestamp() -> String {
    datetime_to_iso(&Local::now().naive_local())
}

pub fn current_dutch_timestamp() -> String {
    Local::now().naive_local().format(DUTCH_FORMAT).to_string()
}

/// Canonical timestamp → `dd-mm-yyyy HH:MM`.
/// Values that do not parse are shown as stored; missing values as "".
pub fn format_for_display(value: Option<&str>) -> String {
    match value {
        None | Some("") => String::new(),
        Some(v) => NaiveDateTime::parse_from_str(v, ISO_FORMAT)
            .map(|dt| dt.format(DUTCH_FORMAT).to_string())
            .unwrap_or_else(|_| v.to_string()),
    }
}

/// Search bound → `YYYY-MM-DD`. Accepts `dd-mm-yyyy` and ISO dates.
pub fn format_search_date(value: &str) -> Option<String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DUTCH_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .ok()
}

/// Rewrite a stored timestamp written by an older release into the
/// canonical format. Unknown shapes are returned trimmed but otherwise
/// untouched; blank values become `None`.
pub fn normalize_legacy_datetime(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    for fmt in LEGACY_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(datetime_to_iso(&dt));
        }
    }

    Some(value.to_string())
}
