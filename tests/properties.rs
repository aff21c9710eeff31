//! Property tests for construction and single-step arithmetic.

use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anniversary_date::{days_in_month, CalendarDate, DateComponent, Direction, Month, MAX_YEAR};

fn valid_triple(years: std::ops::RangeInclusive<u16>) -> impl Strategy<Value = (u16, u8, u8)> {
    (years, 1u8..=12).prop_flat_map(|(year, ordinal)| {
        let month = Month::from_ordinal(ordinal).unwrap();
        (Just(year), Just(ordinal), 1..=days_in_month(month, year))
    })
}

fn component() -> impl Strategy<Value = DateComponent> {
    prop_oneof![
        Just(DateComponent::Year),
        Just(DateComponent::Month),
        Just(DateComponent::Day),
    ]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

fn hash_of(date: &CalendarDate) -> u64 {
    let mut hasher = DefaultHasher::new();
    date.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: constructing a date reads back the same triple.
    #[test]
    fn property_construction_round_trips((year, month, day) in valid_triple(1..=MAX_YEAR)) {
        let d = CalendarDate::new(i32::from(year), i32::from(month), i32::from(day)).unwrap();
        prop_assert_eq!(d.year(), year);
        prop_assert_eq!(d.month().ordinal(), month);
        prop_assert_eq!(d.day(), day);
        prop_assert_eq!(d.to_string().parse::<CalendarDate>().unwrap(), d);
    }

    /// PROPERTY: a day step forward then back returns to the same date.
    #[test]
    fn property_day_steps_are_inverse((year, month, day) in valid_triple(2..=MAX_YEAR - 1)) {
        let d = CalendarDate::new(i32::from(year), i32::from(month), i32::from(day)).unwrap();
        let forward = d.shift(DateComponent::Day, Direction::Forward).unwrap();
        prop_assert_eq!(forward.shift(DateComponent::Day, Direction::Backward).unwrap(), d);
        let backward = d.shift(DateComponent::Day, Direction::Backward).unwrap();
        prop_assert_eq!(backward.shift(DateComponent::Day, Direction::Forward).unwrap(), d);
    }

    /// PROPERTY: February has 29 days exactly in Gregorian leap years.
    #[test]
    fn property_february_length(year in 1..=MAX_YEAR) {
        let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        prop_assert_eq!(days_in_month(Month::February, year) == 29, leap);
    }

    /// PROPERTY: sticky flags are exclusive and survive any sequence of steps.
    #[test]
    fn property_sticky_flags_are_stable(
        (year, month, day) in valid_triple(100..=9000),
        steps in proptest::collection::vec((component(), direction()), 1..24),
    ) {
        let start = CalendarDate::new(i32::from(year), i32::from(month), i32::from(day)).unwrap();
        prop_assert!(!(start.was_leap_day() && start.was_month_end()));

        let mut d = start;
        for (component, direction) in steps {
            d = d.shift(component, direction).unwrap();
            prop_assert_eq!(d.provenance(), start.provenance());
            prop_assert!(d.day() >= 1 && d.day() <= d.days_in_month());
            prop_assert_eq!(d.is_leap_day(), d.month() == Month::February && d.day() == 29);
        }
    }

    /// PROPERTY: equality and hashing ignore provenance.
    #[test]
    fn property_equality_ignores_provenance(
        (year, month, day) in valid_triple(100..=9000),
        steps in proptest::collection::vec((component(), direction()), 1..24),
    ) {
        let mut d = CalendarDate::new(i32::from(year), i32::from(month), i32::from(day)).unwrap();
        for (component, direction) in steps {
            d = d.shift(component, direction).unwrap();
        }
        let fresh = d.rebased();
        let rebuilt = CalendarDate::from_raw(d.to_raw()).unwrap();

        prop_assert_eq!(fresh, d);
        prop_assert_eq!(rebuilt, d);
        prop_assert_eq!(fresh.cmp(&d), std::cmp::Ordering::Equal);
        prop_assert_eq!(hash_of(&fresh), hash_of(&d));
        prop_assert_eq!(fresh.provenance(), rebuilt.provenance());
    }

    /// PROPERTY: a month-end anniversary always lands on a month end.
    #[test]
    fn property_month_end_anniversary_stays_at_month_end(
        (year, month, _) in valid_triple(100..=9000),
        steps in proptest::collection::vec(direction(), 1..24),
    ) {
        let month = Month::from_ordinal(month).unwrap();
        let last = days_in_month(month, year);
        let start = CalendarDate::new(i32::from(year), i32::from(month.ordinal()), i32::from(last)).unwrap();
        prop_assume!(start.was_month_end());

        let mut d = start;
        for direction in steps {
            d = d.shift(DateComponent::Month, direction).unwrap();
            prop_assert_eq!(d.day(), d.days_in_month());
        }
    }
}
