//! Builders shared by the unit tests.

use crate::{DayNumber, GregorianDate};

pub fn date(year: i64, month: i64, day: i64) -> GregorianDate {
    GregorianDate::new(year, month, day)
        .unwrap_or_else(|err| panic!("failed to construct test date {year}-{month}-{day}: {err}"))
}

pub fn day_number(value: i64) -> DayNumber {
    DayNumber::new(value).unwrap_or_else(|err| panic!("failed to construct test day number {value}: {err}"))
}
