use crate::consts::{LEAP_YEAR_MONTH_DAYS, MIN_DAY, NON_LEAP_YEAR_MONTH_DAYS};
use crate::{gregorian, is_leap_day, DateError, Month, RawDate, Weekday, Year};

/// A validated date together with every field that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedFields {
    pub year: Year,
    pub month: Month,
    pub day: u8,
    pub weekday: Weekday,
    pub day_of_year: u32,
    pub is_leap_year: bool,
    pub days_in_month: u8,
    pub is_leap_day: bool,
}

impl DerivedFields {
    /// Whether the day is the last one of its month
    pub const fn is_month_end(&self) -> bool {
        self.day == self.days_in_month
    }

    pub const fn to_raw(&self) -> RawDate {
        RawDate::new(
            self.year.get() as i32,
            self.month.ordinal() as i32,
            self.day as i32,
        )
    }
}

/// Validates a raw triple and computes its dependent fields.
///
/// This is the only gate through which a date value comes into existence.
///
/// # Errors
/// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` for a component
/// outside its range.
pub fn derive(raw: RawDate) -> Result<DerivedFields, DateError> {
    let year = Year::new(raw.year)?;
    let month = Month::new(raw.month)?;
    let day = u8::try_from(raw.day)
        .ok()
        .filter(|day| (MIN_DAY..=month.days_in(year.get())).contains(day))
        .ok_or(DateError::InvalidDay {
            year: raw.year,
            month: raw.month,
            day: raw.day,
        })?;

    let is_leap_year = gregorian::is_leap_year(year.get());
    let table = if is_leap_year {
        &LEAP_YEAR_MONTH_DAYS
    } else {
        &NON_LEAP_YEAR_MONTH_DAYS
    };

    let fields = DerivedFields {
        year,
        month,
        day,
        weekday: gregorian::day_of_week(year.get(), month, day)?,
        day_of_year: gregorian::day_of_year(year.get(), month, day)?,
        is_leap_year,
        days_in_month: table[usize::from(month.ordinal() - 1)],
        is_leap_day: is_leap_day(day, month, year.get()),
    };
    log::trace!(
        "derived {raw}: weekday={} day_of_year={} leap_year={} days_in_month={} leap_day={}",
        fields.weekday,
        fields.day_of_year,
        fields.is_leap_year,
        fields.days_in_month,
        fields.is_leap_day
    );
    Ok(fields)
}
