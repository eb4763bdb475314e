//! SIN (seizure identification number) validation.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

/// Marker SIN used by assistance records instead of a real item number.
pub const BIJSTAND_SIN: &str = "BIJSTAND";

static SIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[0-9]{4}$").expect("SIN pattern is a valid regex")
});

/// Normalize operator input into a stored SIN.
///
/// Input is trimmed and upper-cased. `BIJSTAND` passes through; anything
/// else has to be four ASCII letters followed by four ASCII digits.
/// Applying it twice yields the same value as applying it once.
pub fn normalize_sin(input: &str) -> AppResult<String> {
    let sin = input.trim().to_uppercase();

    if sin == BIJSTAND_SIN || SIN_PATTERN.is_match(&sin) {
        Ok(sin)
    } else {
        Err(AppError::InvalidSin(input.trim().to_string()))
    }
}

pub fn is_bijstand_sin(sin: &str) -> bool {
    sin.trim().eq_ignore_ascii_case(BIJSTAND_SIN)
}
