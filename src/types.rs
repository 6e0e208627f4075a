use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_DAY_NUMBER, MAX_MONTH, MIN_DAY, MIN_DAY_NUMBER,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A day number guaranteed to be in the range `MIN_DAY_NUMBER..=MAX_DAY_NUMBER`.
///
/// Day 0 is the Julian Day epoch, -4713-11-24 in the proleptic Gregorian calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct DayNumber(i64);

impl DayNumber {
    /// Day number of the Julian Day epoch
    pub const EPOCH: Self = Self(0);
    /// Smallest supported day number
    pub const MIN: Self = Self(MIN_DAY_NUMBER);
    /// Largest supported day number
    pub const MAX: Self = Self(MAX_DAY_NUMBER);

    /// Creates a new `DayNumber`, validating that it lies in the supported domain
    ///
    /// # Errors
    /// Returns `DateError::DayNumberOutOfRange` if the value is below `MIN_DAY_NUMBER`
    /// or above `MAX_DAY_NUMBER`.
    pub const fn new(value: i64) -> Result<Self, DateError> {
        if value < MIN_DAY_NUMBER || value > MAX_DAY_NUMBER {
            return Err(DateError::DayNumberOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Wraps a value already known to be in the domain (the inverse of an in-domain date)
    pub(crate) const fn new_unchecked(value: i64) -> Self {
        debug_assert!(value >= MIN_DAY_NUMBER && value <= MAX_DAY_NUMBER);
        Self(value)
    }

    /// Returns the day number as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Moves forward (or backward, for negative `days`) by a number of days.
    /// Returns `None` if the result leaves the supported domain.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.0.checked_add(days).and_then(|value| Self::new(value).ok())
    }

    /// Day of the week. Day 0 was a Monday.
    pub const fn weekday(self) -> Weekday {
        Weekday::from_index(self.0.rem_euclid(DAYS_PER_WEEK))
    }
}

impl TryFrom<i64> for DayNumber {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayNumber> for i64 {
    fn from(day_number: DayNumber) -> Self {
        day_number.0
    }
}

impl Sub for DayNumber {
    type Output = i64;

    /// Signed number of days between two day numbers
    fn sub(self, rhs: Self) -> i64 {
        self.0 - rhs.0
    }
}

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Maps `0..=6` to Monday..=Sunday; callers reduce modulo 7 first.
    const fn from_index(index: i64) -> Self {
        match index {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// Days since Monday (Monday = 0, Sunday = 6)
    pub const fn days_from_monday(self) -> u8 {
        self as u8
    }
}

// Helper functions

pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Whether `(year, month, day)` names a real proleptic Gregorian date.
/// The year itself is not range checked.
pub const fn is_valid(year: i64, month: i64, day: i64) -> bool {
    if month < 1 || month > MAX_MONTH as i64 {
        return false;
    }
    day >= MIN_DAY as i64 && day <= days_in_month(year, month as u8) as i64
}
