//! Desk calendar helpers built on `chrono`.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Date pattern used across prompts, summaries, and the audit trail.
pub const DATE_PATTERN: &str = "%d-%m-%Y";

/// Error for date strings that do not match [`DATE_PATTERN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    input: String,
    source: chrono::ParseError,
}

impl DateParseError {
    /// Returns the rejected input string.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date `{}`; expected dd-MM-yyyy", self.input)
    }
}

impl Error for DateParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Parses a `dd-MM-yyyy` date string.
///
/// Input is trimmed before parsing. This is a hard failure at the caller
/// boundary; no desk state may change before it succeeds.
pub fn parse_desk_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_PATTERN).map_err(|source| DateParseError {
        input: trimmed.to_string(),
        source,
    })
}

/// Formats a date as `dd-MM-yyyy`.
pub fn format_desk_date(date: NaiveDate) -> String {
    date.format(DATE_PATTERN).to_string()
}

/// Whole calendar days from `start` to `end`, clamped at zero.
///
/// Time of day never enters the calculation; a rental returned on its start
/// date counts zero days.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    end.signed_duration_since(start).num_days().max(0) as u32
}
