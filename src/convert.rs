//! Closed-form conversion between day numbers and proleptic Gregorian dates.
//!
//! Both functions are the Fliegel & Van Flandern formulas evaluated with
//! Rust's native signed division, which truncates toward zero. The constants
//! were derived for exactly that rounding and must stay as written.
//!
//! Neither function validates its input. Results are exact for day numbers in
//! `MIN_DAY_NUMBER..=MAX_DAY_NUMBER` and for valid dates inside that span;
//! outside it the output is unspecified and debug builds panic on overflow.
//! Use [`crate::GregorianDate`] for a checked interface.

/// Converts a day number to a `(year, month, day)` triple.
///
/// ```
/// assert_eq!(julian_day::day_number_to_date(0), (-4713, 11, 24));
/// assert_eq!(julian_day::day_number_to_date(2_451_545), (2000, 1, 1));
/// ```
#[inline]
pub const fn day_number_to_date(day_number: i64) -> (i64, i64, i64) {
    let mut l = day_number + 68569;
    let n = 4 * l / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = 4000 * (l + 1) / 1_461_001;
    l = l - 1461 * i / 4 + 31;
    let j = 80 * l / 2447;
    let day = l - 2447 * j / 80;
    l = j / 11;
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year, month, day)
}

/// Converts a `(year, month, day)` triple to a day number.
///
/// Out-of-range month or day values are not rejected; the formula
/// extrapolates them deterministically.
///
/// ```
/// assert_eq!(julian_day::date_to_day_number(-4713, 11, 24), 0);
/// assert_eq!(julian_day::date_to_day_number(2000, 1, 1), 2_451_545);
/// ```
#[inline]
pub const fn date_to_day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = (month - 14) / 12;
    day - 32075 + 1461 * (year + 4800 + a) / 4 + 367 * (month - 2 - a * 12) / 12
        - 3 * ((year + 4900 + a) / 100) / 4
}
