//! Individual sanitization and validation rules.
//!
//! Each rule is a pure function over one field. Validation rules return the
//! typed value on success or the single [`FieldError`] for that field; a
//! failed required check stops further checks on the same field.

use super::{FieldError, FormField};
use crate::schedule::domain::{Priority, ScheduleTime, TimeParseError, parse_time};

/// Message reported for a missing or non-string title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Message reported for a title that is empty after trimming.
pub const TITLE_EMPTY: &str = "Title cannot be empty";

/// Message reported for an unknown priority name.
pub const PRIORITY_INVALID: &str = "Priority must be one of: low, medium, high";

/// Normalizes a time to canonical `HH:MM` when it parses.
///
/// Unparseable input is returned unchanged; sanitization never invents a
/// value.
#[must_use]
pub fn sanitize_time(raw: Option<&str>) -> Option<String> {
    raw.map(|value| {
        parse_time(value).map_or_else(|_| value.to_owned(), |time| time.to_string())
    })
}

/// Trims surrounding whitespace from a title.
#[must_use]
pub fn sanitize_title(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_owned())
}

/// Drops an empty priority selection.
#[must_use]
pub fn sanitize_priority(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.is_empty()).map(str::to_owned)
}

/// Validates a (sanitized) time field.
///
/// # Errors
///
/// Returns "Time is required" for missing or blank input, otherwise the
/// time parser's own message.
pub fn validate_time(value: Option<&str>) -> Result<ScheduleTime, FieldError> {
    let Some(raw) = value.filter(|candidate| !candidate.trim().is_empty()) else {
        return Err(time_error(&TimeParseError::Required));
    };
    parse_time(raw).map_err(|err| time_error(&err))
}

/// Validates a (sanitized) title field against `max_length` characters.
///
/// # Errors
///
/// Returns [`TITLE_REQUIRED`] when absent, [`TITLE_EMPTY`] when blank, or a
/// length message when longer than `max_length`.
pub fn validate_title(value: Option<&str>, max_length: usize) -> Result<String, FieldError> {
    let Some(raw) = value else {
        return Err(FieldError::new(FormField::Title, TITLE_REQUIRED));
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(FormField::Title, TITLE_EMPTY));
    }
    if trimmed.chars().count() > max_length {
        return Err(FieldError::new(
            FormField::Title,
            title_too_long_message(max_length),
        ));
    }
    Ok(trimmed.to_owned())
}

/// Validates an optional priority name; matching is case-sensitive.
///
/// # Errors
///
/// Returns [`PRIORITY_INVALID`] for names other than `low`, `medium`, or
/// `high`.
pub fn validate_priority(value: Option<&str>) -> Result<Option<Priority>, FieldError> {
    value
        .filter(|name| !name.is_empty())
        .map(|name| {
            Priority::try_from(name)
                .map_err(|_| FieldError::new(FormField::Priority, PRIORITY_INVALID))
        })
        .transpose()
}

/// Message reported for a title longer than `max_length` characters.
#[must_use]
pub fn title_too_long_message(max_length: usize) -> String {
    format!("Title must be {max_length} characters or less")
}

fn time_error(err: &TimeParseError) -> FieldError {
    FieldError::new(FormField::Time, err.to_string())
}
