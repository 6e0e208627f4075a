/// Smallest day number for which both conversions are exact (-4800-03-01).
///
/// Every dividend in the closed-form formulas is non-negative from here on,
/// so truncating division agrees with floor division.
pub const MIN_DAY_NUMBER: i64 = -32_044;

/// Largest supported day number. Keeps every intermediate product within `i64`.
pub const MAX_DAY_NUMBER: i64 = 1_000_000_000_000_000_000;

/// Earliest year with any supported date
pub const MIN_YEAR: i64 = -4800;

/// Years beyond this are rejected before evaluating the inverse formula
pub(crate) const YEAR_LIMIT: i64 = 3_000_000_000_000_000;

/// Day number of 2000-01-01, handy as a modern reference point
pub const J2000_DAY_NUMBER: i64 = 2_451_545;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// ISO week 1 is the week containing this day of January
pub(crate) const ISO_WEEK_ANCHOR_DAY: u8 = 4;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Day numbers verified by the reference round-trip run
pub const REFERENCE_RUN_LENGTH: u64 = 10_000_000;
