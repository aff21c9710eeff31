//! Calendar dates whose year and month arithmetic keeps anniversaries.
//!
//! A [`CalendarDate`] created on the last day of a month keeps landing on
//! the last day of whatever month it is moved to, and one created on
//! February 29 comes back to February 29 whenever it reaches a leap year:
//!
//! ```
//! use anniversary_date::{CalendarDate, DateComponent};
//!
//! let mut date = CalendarDate::new(2021, 1, 31)?;
//! date.increment(DateComponent::Month)?;
//! assert_eq!(date.to_string(), "2/28/2021");
//! date.increment(DateComponent::Month)?;
//! assert_eq!(date.to_string(), "3/31/2021");
//! # Ok::<(), anniversary_date::DateError>(())
//! ```

mod consts;
mod derivation;
mod error;
mod gregorian;
mod parse;
mod prelude;
mod shift;
mod types;

pub use consts::*;
pub use derivation::{derive, DerivedFields};
pub use error::{DateError, ParseError};
pub use gregorian::{day_of_week, day_of_year};
pub use parse::parse_components;
pub use shift::{shift_component, Provenance};
pub use types::{
    days_in_month, is_leap_day, is_leap_year, DateComponent, Direction, Month, RawDate, Weekday,
    Year, MONTHS, WEEKDAYS, WEEKDAY_NAMES,
};

use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A valid Gregorian date plus the sticky flags recorded when it was first
/// constructed.
///
/// Equality, ordering and hashing look at `(year, month, day)` only; two
/// dates with different provenance compare equal.
#[derive(Debug, Clone, Copy)]
pub struct CalendarDate {
    fields: DerivedFields,
    provenance: Provenance,
}

impl CalendarDate {
    /// Constructs a date from a raw (year, month, day) triple, capturing
    /// its sticky flags.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` if the triple
    /// is not a date.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        Self::from_raw(RawDate::new(year, month, day))
    }

    /// Same as [`CalendarDate::new`] for an already assembled triple.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` if the triple
    /// is not a date.
    pub fn from_raw(raw: RawDate) -> Result<Self, DateError> {
        let fields = derive(raw)?;
        Ok(Self {
            fields,
            provenance: Provenance::capture(&fields),
        })
    }

    /// Parses a delimited string whose components appear in `order`.
    ///
    /// # Errors
    /// Returns `DateError::Malformed` for a string that does not split into
    /// three numbers, or an invalid-component error for a non-date.
    pub fn parse_with(
        input: &str,
        order: [DateComponent; NUMBER_DATE_COMPONENTS],
        separator: char,
    ) -> Result<Self, DateError> {
        Self::from_raw(parse_components(order, input, separator)?)
    }

    /// Parses the SQL `year-month-day` form.
    ///
    /// # Errors
    /// See [`CalendarDate::parse_with`].
    pub fn from_sql_str(input: &str) -> Result<Self, DateError> {
        Self::parse_with(input, DateComponent::YEAR_MONTH_DAY, SQL_DATE_SEPARATOR)
    }

    /// Parses a string through a strftime-style pattern.
    ///
    /// # Errors
    /// Returns `DateError::Malformed` if the input does not match the
    /// pattern, or an invalid-component error for a year outside
    /// `1..=MAX_YEAR`.
    pub fn parse_pattern(input: &str, pattern: &str) -> Result<Self, DateError> {
        Self::try_from(gregorian::parse(input, pattern)?)
    }

    pub const fn year(&self) -> u16 {
        self.fields.year.get()
    }

    pub const fn month(&self) -> Month {
        self.fields.month
    }

    pub const fn day(&self) -> u8 {
        self.fields.day
    }

    /// Value of a single component
    pub const fn component(&self, component: DateComponent) -> i32 {
        self.fields.to_raw().get(component)
    }

    pub const fn weekday(&self) -> Weekday {
        self.fields.weekday
    }

    /// Weekday ordinal, 1 = Sunday … 7 = Saturday
    pub const fn weekday_ordinal(&self) -> u8 {
        self.fields.weekday.ordinal()
    }

    pub const fn weekday_name(&self) -> &'static str {
        self.fields.weekday.name()
    }

    /// 1-based day of the year
    pub const fn day_of_year(&self) -> u32 {
        self.fields.day_of_year
    }

    pub const fn is_leap_year(&self) -> bool {
        self.fields.is_leap_year
    }

    pub const fn days_in_month(&self) -> u8 {
        self.fields.days_in_month
    }

    /// Whether this is February 29
    pub const fn is_leap_day(&self) -> bool {
        self.fields.is_leap_day
    }

    /// Whether this date was first constructed on a February 29
    pub const fn was_leap_day(&self) -> bool {
        self.provenance.was_leap_day()
    }

    /// Whether this date was first constructed on the last day of a month
    pub const fn was_month_end(&self) -> bool {
        self.provenance.was_month_end()
    }

    pub const fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub const fn fields(&self) -> &DerivedFields {
        &self.fields
    }

    pub const fn to_raw(&self) -> RawDate {
        self.fields.to_raw()
    }

    /// The same date constructed afresh, with sticky flags taken from its
    /// current day rather than inherited.
    pub const fn rebased(&self) -> Self {
        Self {
            fields: self.fields,
            provenance: Provenance::capture(&self.fields),
        }
    }

    /// First day of this date's month, constructed afresh.
    ///
    /// # Errors
    /// Propagates derivation errors, which do not occur for a valid date.
    pub fn start_of_month(&self) -> Result<Self, DateError> {
        Self::from_raw(RawDate {
            day: i32::from(MIN_DAY),
            ..self.to_raw()
        })
    }

    /// Last day of this date's month, constructed afresh.
    ///
    /// # Errors
    /// Propagates derivation errors, which do not occur for a valid date.
    pub fn end_of_month(&self) -> Result<Self, DateError> {
        Self::from_raw(RawDate {
            day: i32::from(self.fields.days_in_month),
            ..self.to_raw()
        })
    }

    /// The date one step away along `component`, carrying this date's
    /// sticky flags.
    ///
    /// # Errors
    /// Returns `UnderflowYear` before year 1 and `InvalidYear` past
    /// `MAX_YEAR`.
    pub fn shift(&self, component: DateComponent, direction: Direction) -> Result<Self, DateError> {
        let raw = shift_component(&self.fields, self.provenance, component, direction)?;
        Ok(Self {
            fields: derive(raw)?,
            provenance: self.provenance,
        })
    }

    /// The date `count` single steps away along `component`.
    ///
    /// Steps are taken one at a time and the anniversary rules apply after
    /// each of them.
    ///
    /// # Errors
    /// Returns `ZeroCount` for `count == 0`, and `StepFailed` naming the
    /// failing step and the date before it if any step fails.
    pub fn shift_by(
        &self,
        component: DateComponent,
        direction: Direction,
        count: u32,
    ) -> Result<Self, DateError> {
        if count == 0 {
            return Err(DateError::ZeroCount(component));
        }
        let mut current = *self;
        for step in 1..=count {
            let before = current;
            current = before.shift(component, direction).map_err(|source| {
                log::debug!("{component} {direction} step {step}/{count} failed at {before}: {source}");
                DateError::StepFailed {
                    component,
                    step,
                    count,
                    before,
                    source: Box::new(source),
                }
            })?;
        }
        Ok(current)
    }

    /// Moves forward one unit of `component`. On error the date is unchanged.
    ///
    /// # Errors
    /// See [`CalendarDate::shift`].
    pub fn increment(&mut self, component: DateComponent) -> Result<(), DateError> {
        *self = self.shift(component, Direction::Forward)?;
        Ok(())
    }

    /// Moves backward one unit of `component`. On error the date is unchanged.
    ///
    /// # Errors
    /// See [`CalendarDate::shift`].
    pub fn decrement(&mut self, component: DateComponent) -> Result<(), DateError> {
        *self = self.shift(component, Direction::Backward)?;
        Ok(())
    }

    /// Moves forward `count` units of `component`. On error the date is
    /// unchanged.
    ///
    /// # Errors
    /// See [`CalendarDate::shift_by`].
    pub fn increment_by(&mut self, component: DateComponent, count: u32) -> Result<(), DateError> {
        *self = self.shift_by(component, Direction::Forward, count)?;
        Ok(())
    }

    /// Moves backward `count` units of `component`. On error the date is
    /// unchanged.
    ///
    /// # Errors
    /// See [`CalendarDate::shift_by`].
    pub fn decrement_by(&mut self, component: DateComponent, count: u32) -> Result<(), DateError> {
        *self = self.shift_by(component, Direction::Backward, count)?;
        Ok(())
    }

    /// Renders the date through a strftime-style pattern.
    ///
    /// # Errors
    /// Returns `DateError::InvalidPattern` if the primitive rejects the
    /// pattern.
    pub fn to_format_string(&self, pattern: &str) -> Result<String, DateError> {
        gregorian::format(self.year(), self.month(), self.day(), pattern)
    }

    /// The primitive's representation of this date.
    ///
    /// Every year up to `MAX_YEAR` is inside `NaiveDate`'s range.
    ///
    /// # Errors
    /// Propagates primitive errors, which do not occur for a valid date.
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        gregorian::naive_date(self.year(), self.month(), self.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DEFAULT_DATE_SEPARATOR}{}{DEFAULT_DATE_SEPARATOR}{}",
            self.fields.month, self.fields.day, self.fields.year
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses the canonical `month/day/year` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, DateComponent::MONTH_DAY_YEAR, DEFAULT_DATE_SEPARATOR)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl TryFrom<RawDate> for CalendarDate {
    type Error = DateError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.fields.day == other.fields.day
            && self.fields.month == other.fields.month
            && self.fields.year == other.fields.year
    }
}

impl Eq for CalendarDate {}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.year.hash(state);
        self.fields.month.hash(state);
        self.fields.day.hash(state);
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.fields.year, self.fields.month, self.fields.day).cmp(&(
            other.fields.year,
            other.fields.month,
            other.fields.day,
        ))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
