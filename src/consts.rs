/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = u16::MAX;

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// The only day that exists in leap years alone (February 29)
pub const LEAP_DAY: u8 = 29;

/// Maximum days in each month of a non-leap year, indexed by month ordinal - 1
pub const NON_LEAP_YEAR_MONTH_DAYS: [u8; 12] = [
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Maximum days in each month of a leap year, indexed by month ordinal - 1
pub const LEAP_YEAR_MONTH_DAYS: [u8; 12] = [
    31, // January
    29, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Number of components in a full date (year, month, day)
pub const NUMBER_DATE_COMPONENTS: usize = 3;
/// Number of separators between the components of a delimited date string
pub const NUMBER_DATE_SEPARATORS: usize = 2;

/// Separator of the canonical `month/day/year` form
pub const DEFAULT_DATE_SEPARATOR: char = '/';
/// Separator of the SQL `year-month-day` form
pub const SQL_DATE_SEPARATOR: char = '-';

/// Zero-padded pattern equivalent to the canonical form, in strftime syntax
pub const DEFAULT_DATE_PATTERN: &str = "%m/%d/%Y";
/// SQL date pattern, in strftime syntax
pub const SQL_DATE_PATTERN: &str = "%Y-%m-%d";
