//! Conversion between Julian Day Numbers and proleptic Gregorian dates.
//!
//! [`day_number_to_date`] and [`date_to_day_number`] are the raw closed-form
//! conversions. [`GregorianDate`] and [`DayNumber`] wrap them with validation
//! over the supported domain `MIN_DAY_NUMBER..=MAX_DAY_NUMBER`.

mod consts;
mod convert;
mod prelude;
pub mod roundtrip;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use convert::{date_to_day_number, day_number_to_date};
pub use roundtrip::{Harness, RoundTrip, RoundTripReport};
pub use types::{DayNumber, Weekday, days_in_month, is_leap_year, is_valid};

use crate::prelude::*;
use std::str::FromStr;

/// A validated proleptic Gregorian date inside the supported domain.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  i64,
    month: u8,
    day:   u8,
}

/// Error type for date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(i64),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: i64 },

    /// The date exists but lies outside `MIN_DAY_NUMBER..=MAX_DAY_NUMBER`.
    #[error("Date {year}-{month:02}-{day:02} is outside the supported range")]
    DateOutOfRange { year: i64, month: u8, day: u8 },

    #[error("Day number {0} is outside the supported range {min}..={max}", min = MIN_DAY_NUMBER, max = MAX_DAY_NUMBER)]
    DayNumberOutOfRange(i64),

    #[error("Empty date string")]
    EmptyInput,
}

impl GregorianDate {
    /// Creates a new date, validating month, day of month and the supported domain.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` for components that
    /// do not name a real date, and `DateError::DateOutOfRange` for real dates outside
    /// the supported domain.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        let month_u8 = u8::try_from(month)
            .ok()
            .filter(|m| (JANUARY..=MAX_MONTH).contains(m))
            .ok_or(DateError::InvalidMonth(month))?;

        let max_day = days_in_month(year, month_u8);
        let day_u8 = u8::try_from(day)
            .ok()
            .filter(|d| (MIN_DAY..=max_day).contains(d))
            .ok_or(DateError::InvalidDay {
                year,
                month: month_u8,
                day,
            })?;

        let out_of_range = DateError::DateOutOfRange {
            year,
            month: month_u8,
            day: day_u8,
        };

        // The inverse formula is only exact from -4800-03-01 onwards
        if year > YEAR_LIMIT || (year, month_u8) < (MIN_YEAR, MARCH) {
            return Err(out_of_range);
        }
        if DayNumber::new(date_to_day_number(year, month, day)).is_err() {
            return Err(out_of_range);
        }

        Ok(Self {
            year,
            month: month_u8,
            day: day_u8,
        })
    }

    /// Converts a validated day number to its date.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_day_number(day_number: DayNumber) -> Self {
        let (year, month, day) = day_number_to_date(day_number.get());
        // month is 1..=12 and day is 1..=31 for any in-domain day number
        Self {
            year,
            month: month as u8,
            day: day as u8,
        }
    }

    /// Converts to a day number.
    pub const fn to_day_number(self) -> DayNumber {
        DayNumber::new_unchecked(date_to_day_number(
            self.year,
            self.month as i64,
            self.day as i64,
        ))
    }

    /// Returns the year (may be zero or negative)
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month, 1..=12
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month, starting at 1
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_tuple(&self) -> (i64, u8, u8) {
        (self.year, self.month, self.day)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    pub const fn weekday(&self) -> Weekday {
        self.to_day_number().weekday()
    }

    /// ISO 8601 week number (1..=53).
    ///
    /// Weeks start on Monday and week 1 is the week containing January 4, so
    /// early January can belong to the previous year's last week and late
    /// December to the next year's first week.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn iso_week(&self) -> u8 {
        let day_number = self.to_day_number().get();
        let week_one = [self.year + 1, self.year]
            .into_iter()
            .map(iso_week_one_start)
            .find(|start| day_number >= *start)
            .unwrap_or_else(|| iso_week_one_start(self.year - 1));
        ((day_number - week_one) / DAYS_PER_WEEK + 1) as u8
    }

    /// Returns the date `days` days later (earlier, for negative `days`).
    ///
    /// # Errors
    /// Returns `DateError::DayNumberOutOfRange` if the result leaves the supported domain.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let day_number = self.to_day_number();
        day_number
            .checked_add_days(days)
            .map(Self::from_day_number)
            .ok_or_else(|| DateError::DayNumberOutOfRange(day_number.get().saturating_add(days)))
    }
}

/// Day number of the Monday starting ISO week 1 of `year`.
///
/// Counted back from March 1 so that the earliest supported year stays exact.
fn iso_week_one_start(year: i64) -> i64 {
    let first_of_march = date_to_day_number(year, i64::from(MARCH), i64::from(MIN_DAY));
    let anchor = first_of_march
        - i64::from(days_in_month(year, FEBRUARY))
        - i64::from(DAYS_IN_MONTH[JANUARY as usize] - ISO_WEEK_ANCHOR_DAY + 1);
    anchor - anchor.rem_euclid(DAYS_PER_WEEK)
}

impl From<DayNumber> for GregorianDate {
    fn from(day_number: DayNumber) -> Self {
        Self::from_day_number(day_number)
    }
}

impl From<GregorianDate> for DayNumber {
    fn from(date: GregorianDate) -> Self {
        date.to_day_number()
    }
}

impl TryFrom<(i64, i64, i64)> for GregorianDate {
    type Error = DateError;

    fn try_from(value: (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // A leading separator is the sign of a negative year
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators",
                parts.len() - 1
            )));
        }

        let year = Self::parse_component(parts[0])?;
        let month = Self::parse_component(parts[1])?;
        let day = Self::parse_component(parts[2])?;

        Self::new(if negative { -year } else { year }, month, day)
    }
}

impl GregorianDate {
    /// Parses an unsigned run of ASCII digits
    fn parse_component(s: &str) -> Result<i64, DateError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<i64>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
