//! Calendar month arithmetic on `YYYY-MM` tokens.
//!
//! # Invariants
//! - Produced tokens are always zero-padded `YYYY-MM` with a year in
//!   `0000..=9999`; arithmetic leaving that range is `MonthError::Overflow`.
//! - Year rollover is handled by calendar arithmetic, never by string edits.

use chrono::{Datelike, Local, Months, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for month tokens that are not a real `YYYY-MM` calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthError {
    /// Token does not have the `YYYY-MM` shape.
    Malformed(String),
    /// Shape is fine but the month number is outside `01..=12`.
    OutOfRange(String),
    /// Arithmetic moved past the supported calendar range.
    Overflow(String),
}

impl Display for MonthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => write!(f, "month `{value}` must use YYYY-MM format"),
            Self::OutOfRange(value) => write!(f, "month `{value}` is not a calendar month"),
            Self::Overflow(value) => write!(f, "month arithmetic overflowed from `{value}`"),
        }
    }
}

impl Error for MonthError {}

/// Parses a `YYYY-MM` token into the first day of that month.
pub fn parse_month(month: &str) -> Result<NaiveDate, MonthError> {
    let trimmed = month.trim();
    if !looks_like_month_token(trimmed) {
        return Err(MonthError::Malformed(month.to_string()));
    }

    let year = trimmed[0..4]
        .parse::<i32>()
        .map_err(|_| MonthError::Malformed(month.to_string()))?;
    let month_number = trimmed[5..7]
        .parse::<u32>()
        .map_err(|_| MonthError::Malformed(month.to_string()))?;

    NaiveDate::from_ymd_opt(year, month_number, 1)
        .ok_or_else(|| MonthError::OutOfRange(month.to_string()))
}

/// Formats a date as its `YYYY-MM` month token.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

const MAX_TOKEN_YEAR: i32 = 9999;

fn checked_key(date: NaiveDate) -> Option<String> {
    (0..=MAX_TOKEN_YEAR)
        .contains(&date.year())
        .then(|| month_key(date))
}

/// Returns the month token for today in local time.
pub fn current_month() -> String {
    month_key(Local::now().date_naive())
}

/// Moves `month` by `delta` calendar months (negative moves backwards).
pub fn shift_month(month: &str, delta: i32) -> Result<String, MonthError> {
    let start = parse_month(month)?;
    let steps = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        start.checked_add_months(steps)
    } else {
        start.checked_sub_months(steps)
    };
    shifted
        .and_then(checked_key)
        .ok_or_else(|| MonthError::Overflow(month.to_string()))
}

pub fn previous_month(month: &str) -> Result<String, MonthError> {
    shift_month(month, -1)
}

pub fn next_month(month: &str) -> Result<String, MonthError> {
    shift_month(month, 1)
}

/// Returns `count` consecutive month tokens starting at `start`.
pub fn month_range(start: &str, count: usize) -> Result<Vec<String>, MonthError> {
    let first = parse_month(start)?;
    (0..count)
        .map(|offset| {
            u32::try_from(offset)
                .ok()
                .and_then(|offset| first.checked_add_months(Months::new(offset)))
                .and_then(checked_key)
                .ok_or_else(|| MonthError::Overflow(start.to_string()))
        })
        .collect()
}

fn looks_like_month_token(value: &str) -> bool {
    if value.len() != 7 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' {
        return false;
    }

    [0usize, 1, 2, 3, 5, 6]
        .iter()
        .all(|index| bytes[*index].is_ascii_digit())
}
