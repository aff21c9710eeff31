use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR};
use crate::prelude::*;
use crate::{CalendarDate, DateComponent, RawDate};

/// Malformed textual input, reported by the delimited and pattern parsers.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Expected {expected} '{separator}' separators, found {found}")]
    SeparatorCount {
        separator: char,
        expected: usize,
        found: usize,
    },
    #[display(fmt = "Empty {_0} segment")]
    EmptySegment(DateComponent),
    #[display(fmt = "Non-numeric {component} segment: {segment}")]
    NonNumeric {
        component: DateComponent,
        segment: String,
    },
    #[display(fmt = "Component order must name YEAR, MONTH and DAY exactly once")]
    InvalidOrder,
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
}

impl std::error::Error for ParseError {}

/// Error type for construction, arithmetic and formatting of dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be {min}-{max})", min = MIN_MONTH, max = MAX_MONTH)]
    InvalidMonth(i32),

    /// Day outside `1..=days_in_month` for its month and year.
    #[error("Invalid day {day} for month {month}/{year}")]
    InvalidDay { year: i32, month: i32, day: i32 },

    /// Input could not be split into numeric components.
    #[error(transparent)]
    Malformed(#[from] ParseError),

    /// A backward step would take the year below 1.
    #[error("Cannot move {component} backward from {from}: year would drop below {min}", min = MIN_YEAR)]
    UnderflowYear {
        component: DateComponent,
        from: RawDate,
    },

    /// A repeated shift was asked for zero steps.
    #[error("Repeat count for {0} must be at least 1")]
    ZeroCount(DateComponent),

    /// One step of a repeated shift failed; no partial progress is kept.
    #[error("Step {step} of {count} moving {component} failed at {before}")]
    StepFailed {
        component: DateComponent,
        step: u32,
        count: u32,
        before: CalendarDate,
        #[source]
        source: Box<DateError>,
    },

    /// A format or parse pattern was rejected by the calendar primitive.
    #[error("Invalid date pattern: {0}")]
    InvalidPattern(String),
}

impl DateError {
    /// The component that failed validation, for the invalid-component kinds
    pub const fn invalid_component(&self) -> Option<DateComponent> {
        match self {
            Self::InvalidYear(_) => Some(DateComponent::Year),
            Self::InvalidMonth(_) => Some(DateComponent::Month),
            Self::InvalidDay { .. } => Some(DateComponent::Day),
            _ => None,
        }
    }

    /// Unwraps `StepFailed` down to the error of the failing step
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::StepFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
