//! Field validators for incoming construction stage records.
//!
//! Pure, stateless checks. Each validator either passes or fails with a
//! [`CoreError::Validation`] carrying a caller-facing message. The record
//! pipeline runs them fail-fast: the first violation aborts the operation
//! before anything is written.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::instant::parse_instant;

/// Maximum length for `name` and `externalId`.
pub const MAX_TEXT_LEN: usize = 255;

/// ISO 8601 calendar date with optional time-of-day and optional `Z` or
/// numeric offset, e.g. `2022-12-31`, `2022-12-31T14:59:00Z`,
/// `2022-12-31 14:59+02:00`.
static ISO_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])([T ]([01]\d|2[0-3]):[0-5]\d(:[0-5]\d(\.\d+)?)?([zZ]|[+-]([01]\d|2[0-3])(:?[0-5]\d)?)?)?$",
    )
    .expect("ISO date regex must compile")
});

/// 3- or 6-digit hex color code prefixed by `#`.
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("color regex must compile")
});

fn validation(message: &str) -> CoreError {
    CoreError::Validation(message.to_string())
}

/// A date string is well-formed when it matches the ISO grammar and
/// resolves to a real instant (the grammar alone admits impossible
/// calendar dates like `2022-02-30`).
fn is_valid_date(value: &str) -> bool {
    ISO_DATE_RE.is_match(value) && parse_instant(value).is_some()
}

/// `name` must fit in 255 characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.len() > MAX_TEXT_LEN {
        return Err(validation("Name exceeds limit of 255 characters!"));
    }
    Ok(())
}

/// `startDate` is required and must be a well-formed ISO 8601 string.
pub fn validate_start_date(start_date: &str) -> Result<(), CoreError> {
    if !is_valid_date(start_date) {
        return Err(validation(
            "Invalid start date, must be in ISO8601 format, i.e. 2022-12-31T14:59:00Z",
        ));
    }
    Ok(())
}

/// `endDate` is optional; when present it must be well-formed ISO 8601
/// and must not sort chronologically before `startDate`.
pub fn validate_end_date(start_date: &str, end_date: Option<&str>) -> Result<(), CoreError> {
    let Some(end_date) = end_date else {
        return Ok(());
    };
    if !is_valid_date(end_date) {
        return Err(validation(
            "Invalid end date, must be in ISO8601 format, i.e. 2022-12-31T14:59:00Z",
        ));
    }
    if let (Some(start), Some(end)) = (parse_instant(start_date), parse_instant(end_date)) {
        if end < start {
            return Err(validation("End date cannot be before start date!"));
        }
    }
    Ok(())
}

/// `externalId` is optional; when present it must fit in 255 characters.
pub fn validate_external_id(external_id: Option<&str>) -> Result<(), CoreError> {
    if let Some(external_id) = external_id {
        if external_id.len() > MAX_TEXT_LEN {
            return Err(validation("External ID exceeds limit of 255 characters!"));
        }
    }
    Ok(())
}

/// `color` is optional; when present it must be a `#RGB` or `#RRGGBB`
/// hex color code.
pub fn validate_color(color: Option<&str>) -> Result<(), CoreError> {
    if let Some(color) = color {
        if !COLOR_RE.is_match(color) {
            return Err(validation("Invalid color code"));
        }
    }
    Ok(())
}
