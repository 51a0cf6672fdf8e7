//! Wall-clock time parsing and canonical `HH:MM` values.
//!
//! Users type times loosely ("9:30 pm", " 07:05 ", "12:00AM"). Everything
//! that reaches a stored task goes through [`parse_time`] first and is kept
//! as a [`ScheduleTime`], whose textual form is always the zero-padded
//! 24-hour `HH:MM` string.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing user-supplied time input.
///
/// The messages are shown to users verbatim and matched on by callers, so
/// their wording is part of the contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimeParseError {
    /// The input was empty or whitespace-only.
    #[error("Time is required")]
    Required,

    /// A 24-hour input named an hour above 23.
    #[error("Hour must be between 00 and 23")]
    HourOutOfRange,

    /// A 12-hour input named an hour outside `1..=12`.
    #[error("Hour must be between 1 and 12")]
    MeridiemHourOutOfRange,

    /// The minute component was above 59.
    #[error("Minutes must be between 00 and 59")]
    MinuteOutOfRange,

    /// The input matched neither accepted grammar.
    #[error("Invalid time format. Use HH:MM (24-hour) or H:MM AM/PM (12-hour)")]
    InvalidFormat,

    /// The input parses, but is not already in canonical `HH:MM` form.
    #[error("Time '{0}' is not in canonical HH:MM form")]
    NotCanonical(String),
}

/// A canonical 24-hour wall-clock time.
///
/// Values order chronologically, which coincides with the lexicographic
/// order of their `HH:MM` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScheduleTime {
    hour: u8,
    minute: u8,
}

impl ScheduleTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Creates a time from validated 24-hour components.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::HourOutOfRange`] or
    /// [`TaskDomainError::MinuteOutOfRange`] when a component is out of range.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, TaskDomainError> {
        if hour > 23 {
            return Err(TaskDomainError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TaskDomainError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Parses a string that must already be canonical `HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns the [`parse_time`] error for unparseable input, or
    /// [`TimeParseError::NotCanonical`] when the input parses but differs
    /// from its canonical rendering (for example `9:30` or `9:30 AM`).
    pub fn parse_canonical(value: &str) -> Result<Self, TimeParseError> {
        let parsed = parse_time(value)?;
        if parsed.to_string() != value {
            return Err(TimeParseError::NotCanonical(value.to_owned()));
        }
        Ok(parsed)
    }

    /// Returns the hour, `0..=23`.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute, `0..=59`.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Renders the time on a 12-hour clock, e.g. `1:30 PM` or `12:00 AM`.
    #[must_use]
    pub fn display_12h(self) -> String {
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour {
            0 => 12,
            1..=12 => self.hour,
            _ => self.hour - 12,
        };
        format!("{hour}:{:02} {meridiem}", self.minute)
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ScheduleTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl TryFrom<String> for ScheduleTime {
    type Error = TimeParseError;

    /// Persisted times must be canonical; anything else is treated as
    /// corrupt data rather than silently normalized.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_canonical(&value)
    }
}

impl From<ScheduleTime> for String {
    fn from(value: ScheduleTime) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parses flexible time input into a canonical [`ScheduleTime`].
///
/// Leading and trailing whitespace is ignored. Two grammars are accepted,
/// tried in order:
///
/// 1. `H:MM` or `HH:MM` followed by `AM`/`PM` (any case, optional space).
///    The hour must be `1..=12`; `12 AM` is midnight and `12 PM` is noon.
/// 2. `H:MM` or `HH:MM` on a 24-hour clock, hour `0..=23`.
///
/// # Errors
///
/// Returns a [`TimeParseError`] naming the violated constraint.
///
/// # Examples
///
/// ```
/// use dayplanner::schedule::domain::parse_time;
///
/// assert_eq!(parse_time("9:30 PM").map(|t| t.to_string()), Ok("21:30".to_owned()));
/// assert_eq!(parse_time(" 7:05 ").map(|t| t.to_string()), Ok("07:05".to_owned()));
/// assert!(parse_time("25:00").is_err());
/// ```
pub fn parse_time(input: &str) -> Result<ScheduleTime, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Required);
    }

    if let Some((clock, meridiem)) = split_meridiem(trimmed) {
        let (hour, minute) = split_clock(clock).ok_or(TimeParseError::InvalidFormat)?;
        return from_meridiem(hour, minute, meridiem);
    }

    let (hour, minute) = split_clock(trimmed).ok_or(TimeParseError::InvalidFormat)?;
    if hour > 23 {
        return Err(TimeParseError::HourOutOfRange);
    }
    if minute > 59 {
        return Err(TimeParseError::MinuteOutOfRange);
    }
    Ok(ScheduleTime { hour, minute })
}

/// Returns `true` only for strings already in canonical `HH:MM` form.
///
/// `"09:30"` passes; `"9:30"` and `"9:30 AM"` parse but are rejected.
#[must_use]
pub fn is_valid_time_format(value: &str) -> bool {
    ScheduleTime::parse_canonical(value).is_ok()
}

/// Converts a canonical `HH:MM` string to `H:MM AM/PM` for display.
///
/// Input that is not a canonical time is returned unchanged.
///
/// # Examples
///
/// ```
/// use dayplanner::schedule::domain::format_time_for_display;
///
/// assert_eq!(format_time_for_display("00:00"), "12:00 AM");
/// assert_eq!(format_time_for_display("13:30"), "1:30 PM");
/// assert_eq!(format_time_for_display("soon"), "soon");
/// ```
#[must_use]
pub fn format_time_for_display(value: &str) -> String {
    ScheduleTime::parse_canonical(value)
        .map_or_else(|_| value.to_owned(), ScheduleTime::display_12h)
}

fn from_meridiem(
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
) -> Result<ScheduleTime, TimeParseError> {
    if !(1..=12).contains(&hour) {
        return Err(TimeParseError::MeridiemHourOutOfRange);
    }
    if minute > 59 {
        return Err(TimeParseError::MinuteOutOfRange);
    }
    let hour_24 = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, _) | (Meridiem::Pm, 12) => hour,
        (Meridiem::Pm, _) => hour + 12,
    };
    Ok(ScheduleTime {
        hour: hour_24,
        minute,
    })
}

/// Splits a trailing `AM`/`PM` marker off the input, if present.
fn split_meridiem(value: &str) -> Option<(&str, Meridiem)> {
    let split_at = value.len().checked_sub(2)?;
    let suffix = value.get(split_at..)?;
    let meridiem = if suffix.eq_ignore_ascii_case("am") {
        Meridiem::Am
    } else if suffix.eq_ignore_ascii_case("pm") {
        Meridiem::Pm
    } else {
        return None;
    };
    let clock = value.get(..split_at)?;
    Some((clock.trim_end(), meridiem))
}

/// Splits `H:MM`/`HH:MM` into numeric components without range checks.
fn split_clock(value: &str) -> Option<(u8, u8)> {
    let (hour, minute) = value.split_once(':')?;
    let hour_ok = (1..=2).contains(&hour.len()) && is_ascii_digits(hour);
    let minute_ok = minute.len() == 2 && is_ascii_digits(minute);
    if !(hour_ok && minute_ok) {
        return None;
    }
    Some((hour.parse().ok()?, minute.parse().ok()?))
}

fn is_ascii_digits(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_digit())
}
