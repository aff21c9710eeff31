//! Adapter over the proleptic-Gregorian primitive provided by `chrono`.
//!
//! Everything here answers questions about a concrete (year, month, day)
//! without knowing about sticky flags or date arithmetic.

use crate::{DateError, Month, ParseError, Weekday};
use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

pub(crate) fn naive_date(year: u16, month: Month, day: u8) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(
        i32::from(year),
        u32::from(month.ordinal()),
        u32::from(day),
    )
    .ok_or(DateError::InvalidDay {
        year: i32::from(year),
        month: i32::from(month.ordinal()),
        day: i32::from(day),
    })
}

/// Gregorian leap-year test as answered by the primitive
pub fn is_leap_year(year: u16) -> bool {
    NaiveDate::from_ymd_opt(i32::from(year), 2, 29).is_some()
}

/// Weekday of the given date
///
/// # Errors
/// Returns `DateError::InvalidDay` if the triple does not exist.
pub fn day_of_week(year: u16, month: Month, day: u8) -> Result<Weekday, DateError> {
    Ok(naive_date(year, month, day)?.weekday().into())
}

/// 1-based day of the year of the given date
///
/// # Errors
/// Returns `DateError::InvalidDay` if the triple does not exist.
pub fn day_of_year(year: u16, month: Month, day: u8) -> Result<u32, DateError> {
    Ok(naive_date(year, month, day)?.ordinal())
}

/// Renders a date through a strftime-style pattern.
///
/// # Errors
/// Returns `DateError::InvalidPattern` if the pattern has unknown
/// specifiers or asks for fields a date does not carry (time, offset).
pub fn format(year: u16, month: Month, day: u8, pattern: &str) -> Result<String, DateError> {
    let date = naive_date(year, month, day)?;
    let mut out = String::new();
    write!(out, "{}", date.format(pattern))
        .map_err(|_| DateError::InvalidPattern(pattern.to_owned()))?;
    Ok(out)
}

/// Reads a date through a strftime-style pattern.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` if `input` does not match `pattern`.
pub fn parse(input: &str, pattern: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    NaiveDate::parse_from_str(trimmed, pattern)
        .map_err(|e| ParseError::InvalidFormat(format!("{trimmed} (pattern {pattern}): {e}")))
}
