//! Single-step date arithmetic with anniversary semantics.
//!
//! A date remembers whether it was first created on February 29 or on the
//! last day of its month. Month and year steps use that provenance to
//! decide the resulting day; day steps ignore it.

use crate::consts::{LEAP_DAY, MAX_MONTH, MIN_DAY, MIN_MONTH, MIN_YEAR};
use crate::{
    days_in_month, is_leap_day, DateComponent, DateError, DerivedFields, Direction, Month,
    RawDate, Year,
};
use serde::{Deserialize, Serialize};

/// Sticky flags captured once, when a date is first constructed.
///
/// At most one flag is ever set: a February 29 is a leap day and not a
/// month end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provenance {
    was_leap_day: bool,
    was_month_end: bool,
}

impl Provenance {
    /// Flags for a date constructed directly on `fields`
    pub const fn capture(fields: &DerivedFields) -> Self {
        let was_leap_day = fields.is_leap_day;
        Self {
            was_leap_day,
            was_month_end: !was_leap_day && fields.is_month_end(),
        }
    }

    /// The date was originally constructed on a February 29
    #[inline]
    pub const fn was_leap_day(self) -> bool {
        self.was_leap_day
    }

    /// The date was originally constructed on the last day of a month
    #[inline]
    pub const fn was_month_end(self) -> bool {
        self.was_month_end
    }
}

/// Computes the triple one step away from `from` along `component`.
///
/// `from` must already be a valid date. The result is always a valid
/// triple, except that a year below 1 is reported as an error here and a
/// year past `MAX_YEAR` is left for derivation to reject.
///
/// # Errors
/// Returns `DateError::UnderflowYear` if the step would land before year 1.
pub fn shift_component(
    from: &DerivedFields,
    provenance: Provenance,
    component: DateComponent,
    direction: Direction,
) -> Result<RawDate, DateError> {
    let current = from.to_raw();
    let step = direction.delta();

    let next = match component {
        DateComponent::Day => {
            let day = current.day + step;
            if day < i32::from(MIN_DAY) {
                let (year, month) = roll_month(current.year, current.month - 1);
                let (year, month) = checked_target(year, month, component, current)?;
                RawDate::new(
                    i32::from(year.get()),
                    i32::from(month.ordinal()),
                    i32::from(days_in_month(month, year.get())),
                )
            } else if day > i32::from(from.days_in_month) {
                let (year, month) = roll_month(current.year, current.month + 1);
                RawDate::new(year, month, i32::from(MIN_DAY))
            } else {
                RawDate { day, ..current }
            }
        }
        DateComponent::Month => {
            let (year, month) = roll_month(current.year, current.month + step);
            anniversary(year, month, from.day, provenance, component, current)?
        }
        DateComponent::Year => {
            anniversary(current.year + step, current.month, from.day, provenance, component, current)?
        }
    };

    log::debug!(
        "{component} {direction}: {current} -> {next} (was_leap_day={}, was_month_end={})",
        provenance.was_leap_day,
        provenance.was_month_end
    );
    Ok(next)
}

/// Wraps a month that stepped past either end of the year.
const fn roll_month(year: i32, month: i32) -> (i32, i32) {
    if month < MIN_MONTH as i32 {
        (year - 1, MAX_MONTH as i32)
    } else if month > MAX_MONTH as i32 {
        (year + 1, MIN_MONTH as i32)
    } else {
        (year, month)
    }
}

fn checked_target(
    year: i32,
    month: i32,
    component: DateComponent,
    from: RawDate,
) -> Result<(Year, Month), DateError> {
    if year < i32::from(MIN_YEAR) {
        return Err(DateError::UnderflowYear { component, from });
    }
    Ok((Year::new(year)?, Month::new(month)?))
}

/// Picks the day for a month or year step, in priority order:
/// clamp to the target month's length, restore a leap-day anniversary when
/// the target year has a February 29, pin a month-end anniversary to the
/// target month's last day.
///
/// The leap-day rule does not look at the target month, so a leap-day
/// anniversary that was clamped to 28 comes back as 29 in any month of a
/// leap year.
fn anniversary(
    year: i32,
    month: i32,
    day: u8,
    provenance: Provenance,
    component: DateComponent,
    from: RawDate,
) -> Result<RawDate, DateError> {
    let (year, month) = checked_target(year, month, component, from)?;
    let max_day = days_in_month(month, year.get());

    let day = if day > max_day {
        max_day
    } else if provenance.was_leap_day {
        if is_leap_day(LEAP_DAY, Month::February, year.get()) {
            LEAP_DAY
        } else {
            day
        }
    } else if provenance.was_month_end {
        max_day
    } else {
        day
    };

    Ok(RawDate::new(
        i32::from(year.get()),
        i32::from(month.ordinal()),
        i32::from(day),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::derive;

    const NONE: Provenance = Provenance {
        was_leap_day: false,
        was_month_end: false,
    };
    const LEAP_DAY_ORIGIN: Provenance = Provenance {
        was_leap_day: true,
        was_month_end: false,
    };
    const MONTH_END_ORIGIN: Provenance = Provenance {
        was_leap_day: false,
        was_month_end: true,
    };

    fn step(
        (year, month, day): (i32, i32, i32),
        provenance: Provenance,
        component: DateComponent,
        direction: Direction,
    ) -> Result<RawDate, DateError> {
        let fields = derive(RawDate::new(year, month, day)).unwrap();
        shift_component(&fields, provenance, component, direction)
    }

    #[test]
    fn test_capture_flags() {
        let leap = derive(RawDate::new(2024, 2, 29)).unwrap();
        assert_eq!(Provenance::capture(&leap), LEAP_DAY_ORIGIN);

        let end = derive(RawDate::new(2023, 2, 28)).unwrap();
        assert_eq!(Provenance::capture(&end), MONTH_END_ORIGIN);

        let not_end = derive(RawDate::new(2024, 2, 28)).unwrap();
        assert_eq!(Provenance::capture(&not_end), NONE);
    }

    #[test]
    fn test_provenance_serde() {
        let json = serde_json::to_string(&LEAP_DAY_ORIGIN).unwrap();
        assert_eq!(json, r#"{"was_leap_day":true,"was_month_end":false}"#);
        let parsed: Provenance = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LEAP_DAY_ORIGIN);

        let parsed: Provenance =
            serde_json::from_str(r#"{"was_leap_day":false,"was_month_end":true}"#).unwrap();
        assert_eq!(parsed, MONTH_END_ORIGIN);
    }

    #[test]
    fn test_day_steps() {
        struct TestCase {
            from: (i32, i32, i32),
            direction: Direction,
            to: RawDate,
        }

        let cases = [
            TestCase {
                from: (2023, 3, 15),
                direction: Direction::Forward,
                to: RawDate::new(2023, 3, 16),
            },
            TestCase {
                from: (2023, 3, 1),
                direction: Direction::Backward,
                to: RawDate::new(2023, 2, 28),
            },
            TestCase {
                from: (2024, 3, 1),
                direction: Direction::Backward,
                to: RawDate::new(2024, 2, 29),
            },
            TestCase {
                from: (2023, 1, 1),
                direction: Direction::Backward,
                to: RawDate::new(2022, 12, 31),
            },
            TestCase {
                from: (2023, 4, 30),
                direction: Direction::Forward,
                to: RawDate::new(2023, 5, 1),
            },
            TestCase {
                from: (2023, 12, 31),
                direction: Direction::Forward,
                to: RawDate::new(2024, 1, 1),
            },
        ];

        for case in &cases {
            // Sticky flags never influence day steps
            for provenance in [NONE, LEAP_DAY_ORIGIN, MONTH_END_ORIGIN] {
                assert_eq!(
                    step(case.from, provenance, DateComponent::Day, case.direction).unwrap(),
                    case.to,
                    "{:?} {}",
                    case.from,
                    case.direction
                );
            }
        }
    }

    #[test]
    fn test_month_steps_wrap_year() {
        assert_eq!(
            step((2023, 12, 15), NONE, DateComponent::Month, Direction::Forward).unwrap(),
            RawDate::new(2024, 1, 15)
        );
        assert_eq!(
            step((2023, 1, 15), NONE, DateComponent::Month, Direction::Backward).unwrap(),
            RawDate::new(2022, 12, 15)
        );
    }

    #[test]
    fn test_month_step_clamps_to_shorter_month() {
        assert_eq!(
            step((2023, 1, 30), NONE, DateComponent::Month, Direction::Forward).unwrap(),
            RawDate::new(2023, 2, 28)
        );
        assert_eq!(
            step((2023, 5, 31), NONE, DateComponent::Month, Direction::Backward).unwrap(),
            RawDate::new(2023, 4, 30)
        );
    }

    #[test]
    fn test_month_end_anniversary_pins_last_day() {
        assert_eq!(
            step((2023, 2, 28), MONTH_END_ORIGIN, DateComponent::Month, Direction::Forward)
                .unwrap(),
            RawDate::new(2023, 3, 31)
        );
        assert_eq!(
            step((2023, 4, 30), MONTH_END_ORIGIN, DateComponent::Month, Direction::Forward)
                .unwrap(),
            RawDate::new(2023, 5, 31)
        );
        // Without the flag the naive day is kept
        assert_eq!(
            step((2023, 4, 30), NONE, DateComponent::Month, Direction::Forward).unwrap(),
            RawDate::new(2023, 5, 30)
        );
    }

    #[test]
    fn test_leap_day_anniversary_by_year() {
        assert_eq!(
            step((2024, 2, 29), LEAP_DAY_ORIGIN, DateComponent::Year, Direction::Forward).unwrap(),
            RawDate::new(2025, 2, 28)
        );
        assert_eq!(
            step((2027, 2, 28), LEAP_DAY_ORIGIN, DateComponent::Year, Direction::Forward).unwrap(),
            RawDate::new(2028, 2, 29)
        );
        assert_eq!(
            step((2025, 2, 28), LEAP_DAY_ORIGIN, DateComponent::Year, Direction::Forward).unwrap(),
            RawDate::new(2026, 2, 28)
        );
    }

    #[test]
    fn test_leap_day_anniversary_ignores_target_month() {
        assert_eq!(
            step((2027, 12, 28), LEAP_DAY_ORIGIN, DateComponent::Month, Direction::Forward)
                .unwrap(),
            RawDate::new(2028, 1, 29)
        );
    }

    #[test]
    fn test_month_end_anniversary_by_year() {
        assert_eq!(
            step((2023, 2, 28), MONTH_END_ORIGIN, DateComponent::Year, Direction::Forward)
                .unwrap(),
            RawDate::new(2024, 2, 29)
        );
    }

    #[test]
    fn test_year_underflow() {
        for component in [DateComponent::Year, DateComponent::Month, DateComponent::Day] {
            let result = step((1, 1, 1), NONE, component, Direction::Backward);
            assert_eq!(
                result,
                Err(DateError::UnderflowYear {
                    component,
                    from: RawDate::new(1, 1, 1),
                }),
                "{component}"
            );
        }
    }

    #[test]
    fn test_year_overflow_is_rejected() {
        assert_eq!(
            step((65535, 6, 1), NONE, DateComponent::Year, Direction::Forward),
            Err(DateError::InvalidYear(65536))
        );
        // Day steps leave the out-of-range year for derivation
        assert_eq!(
            step((65535, 12, 31), NONE, DateComponent::Day, Direction::Forward).unwrap(),
            RawDate::new(65536, 1, 1)
        );
    }

    #[test]
    fn test_steps_cross_into_five_digit_years() {
        assert_eq!(
            step((9999, 12, 31), NONE, DateComponent::Day, Direction::Forward).unwrap(),
            RawDate::new(10000, 1, 1)
        );
        assert_eq!(
            step((9999, 12, 31), MONTH_END_ORIGIN, DateComponent::Month, Direction::Forward)
                .unwrap(),
            RawDate::new(10000, 1, 31)
        );
        assert_eq!(
            step((9999, 2, 28), LEAP_DAY_ORIGIN, DateComponent::Year, Direction::Forward).unwrap(),
            RawDate::new(10000, 2, 29)
        );
    }
}
