use crate::consts::{
    CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_DAY, LEAP_YEAR_CYCLE, LEAP_YEAR_MONTH_DAYS, MAX_MONTH,
    MIN_MONTH, NON_LEAP_YEAR_MONTH_DAYS,
};
use crate::prelude::*;
use crate::{DateError, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR`
/// Uses `NonZeroU16` internally, so 0 is not a valid year and the upper
/// bound is the storage limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is < 1 or > `MAX_YEAR`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        let non_zero = u16::try_from(value)
            .ok()
            .and_then(NonZeroU16::new)
            .ok_or(DateError::InvalidYear(value))?;
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a February 29
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Month of the year, numbered 1 (January) to 12 (December).
///
/// The ordinal is the only semantic payload; `Display` renders it as a
/// bare number, matching the canonical `month/day/year` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

/// All months in calendar order, indexed by ordinal - 1
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    /// Creates a Month from its 1-based ordinal
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is outside `1..=12`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_ordinal)
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Looks up a month by ordinal (1 = January … 12 = December)
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal < MIN_MONTH || ordinal > MAX_MONTH {
            return None;
        }
        Some(MONTHS[(ordinal - MIN_MONTH) as usize])
    }

    /// Returns the 1-based ordinal
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// English month name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// Number of days this month has in `year`
    pub const fn days_in(self, year: u16) -> u8 {
        days_in_month(self, year)
    }

    #[inline]
    const fn index(self) -> usize {
        (self.ordinal() - MIN_MONTH) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(DateError::InvalidMonth(i32::from(value)))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.ordinal()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

/// Day of the week, numbered 1 (Sunday) to 7 (Saturday).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 1,
    #[display(fmt = "Monday")]
    Monday = 2,
    #[display(fmt = "Tuesday")]
    Tuesday = 3,
    #[display(fmt = "Wednesday")]
    Wednesday = 4,
    #[display(fmt = "Thursday")]
    Thursday = 5,
    #[display(fmt = "Friday")]
    Friday = 6,
    #[display(fmt = "Saturday")]
    Saturday = 7,
}

/// All weekdays indexed by ordinal - 1
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Weekday names indexed by ordinal - 1
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Weekday {
    /// Looks up a weekday by ordinal (1 = Sunday … 7 = Saturday)
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal < 1 || ordinal as usize > WEEKDAYS.len() {
            return None;
        }
        Some(WEEKDAYS[(ordinal - 1) as usize])
    }

    /// Looks up a weekday by its English name (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Sunday" => Some(Self::Sunday),
            "Monday" => Some(Self::Monday),
            "Tuesday" => Some(Self::Tuesday),
            "Wednesday" => Some(Self::Wednesday),
            "Thursday" => Some(Self::Thursday),
            "Friday" => Some(Self::Friday),
            "Saturday" => Some(Self::Saturday),
            _ => None,
        }
    }

    /// Returns the 1-based ordinal
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// English weekday name
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[(self.ordinal() - 1) as usize]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or_else(|| ParseError::InvalidFormat(value.to_string()))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.ordinal()
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| ParseError::InvalidFormat(s.to_owned()))
    }
}

/// Selects which field an arithmetic operation moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DateComponent {
    #[display(fmt = "YEAR")]
    Year,
    #[display(fmt = "MONTH")]
    Month,
    #[display(fmt = "DAY")]
    Day,
}

impl DateComponent {
    /// Component order of the canonical `month/day/year` form
    pub const MONTH_DAY_YEAR: [Self; 3] = [Self::Month, Self::Day, Self::Year];
    /// Component order of the SQL `year-month-day` form
    pub const YEAR_MONTH_DAY: [Self; 3] = [Self::Year, Self::Month, Self::Day];
}

/// Which way a single arithmetic step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    #[display(fmt = "forward")]
    Forward,
    #[display(fmt = "backward")]
    Backward,
}

impl Direction {
    /// Signed size of one step
    #[inline]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// An unvalidated (year, month, day) triple, as read from input or
/// produced by the arithmetic engine before derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, From, Into)]
#[display(fmt = "{month}/{day}/{year}")]
pub struct RawDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl RawDate {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Value of a single component
    pub const fn get(&self, component: DateComponent) -> i32 {
        match component {
            DateComponent::Year => self.year,
            DateComponent::Month => self.month,
            DateComponent::Day => self.day,
        }
    }

    pub(crate) const fn set(&mut self, component: DateComponent, value: i32) {
        match component {
            DateComponent::Year => self.year = value,
            DateComponent::Month => self.month = value,
            DateComponent::Day => self.day = value,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`, read from the leap or non-leap table
pub const fn days_in_month(month: Month, year: u16) -> u8 {
    if is_leap_year(year) {
        LEAP_YEAR_MONTH_DAYS[month.index()]
    } else {
        NON_LEAP_YEAR_MONTH_DAYS[month.index()]
    }
}

/// True only for February 29 of a leap year
pub const fn is_leap_day(day: u8, month: Month, year: u16) -> bool {
    matches!(month, Month::February) && day == LEAP_DAY && is_leap_year(year)
}
