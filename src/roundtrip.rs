//! Round-trip verification over a run of consecutive day numbers.
//!
//! Each day number is converted to a date and straight back. The run is
//! clean when every recomputed day number equals its input.

use std::fmt;
use std::ops::Range;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{DateError, MAX_DAY_NUMBER, MIN_DAY_NUMBER, date_to_day_number, day_number_to_date};

/// Day numbers evaluated per parallel batch; bounds memory while keeping output ordered.
const PARALLEL_BATCH: i64 = 1 << 16;

/// One forward-and-back conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundTrip {
    pub day_number: i64,
    pub date:       (i64, i64, i64),
    pub roundtrip:  i64,
}

impl RoundTrip {
    /// Converts `day_number` to a date and back.
    pub const fn compute(day_number: i64) -> Self {
        let date = day_number_to_date(day_number);
        let roundtrip = date_to_day_number(date.0, date.1, date.2);
        Self {
            day_number,
            date,
            roundtrip,
        }
    }

    pub const fn is_consistent(&self) -> bool {
        self.day_number == self.roundtrip
    }
}

/// `<day_number> - <year>-<month>-<day> - <roundtrip_day_number>`
impl fmt::Display for RoundTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.date;
        write!(f, "{} - {year}-{month}-{day} - {}", self.day_number, self.roundtrip)
    }
}

/// Outcome of a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundTripReport {
    /// Number of day numbers converted
    pub checked:    u64,
    /// Every record whose round trip did not reproduce its input, in input order
    pub mismatches: Vec<RoundTrip>,
}

impl RoundTripReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    fn record(&mut self, trip: RoundTrip) {
        self.checked += 1;
        if !trip.is_consistent() {
            warn!(%trip, "round-trip mismatch");
            self.mismatches.push(trip);
        }
    }
}

/// Verification run over `start..start + count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Harness {
    range:    Range<i64>,
    parallel: bool,
}

impl Harness {
    /// Creates a sequential run of `count` day numbers starting at `start`.
    ///
    /// # Errors
    /// Returns `DateError::DayNumberOutOfRange` if any day number of the run
    /// falls outside `MIN_DAY_NUMBER..=MAX_DAY_NUMBER`.
    pub fn new(start: i64, count: u64) -> Result<Self, DateError> {
        if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&start) {
            return Err(DateError::DayNumberOutOfRange(start));
        }
        let end = i64::try_from(count)
            .ok()
            .and_then(|count| start.checked_add(count))
            .filter(|end| *end - 1 <= MAX_DAY_NUMBER)
            .ok_or_else(|| {
                DateError::DayNumberOutOfRange(
                    i64::try_from(count).map_or(i64::MAX, |count| start.saturating_add(count - 1)),
                )
            })?;
        Ok(Self {
            range: start..end,
            parallel: false,
        })
    }

    /// Evaluates conversions on the rayon thread pool. Records still reach
    /// the sink in ascending order.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn range(&self) -> Range<i64> {
        self.range.clone()
    }

    /// Runs the verification, handing every record to `sink` in ascending
    /// day-number order.
    ///
    /// # Errors
    /// Returns the first error produced by `sink`; the run stops there.
    pub fn run<F, E>(&self, mut sink: F) -> Result<RoundTripReport, E>
    where
        F: FnMut(&RoundTrip) -> Result<(), E>,
    {
        debug!(
            start = self.range.start,
            end = self.range.end,
            parallel = self.parallel,
            "verifying day-number range"
        );

        let mut report = RoundTripReport::default();
        if self.parallel {
            let mut batch_start = self.range.start;
            while batch_start < self.range.end {
                let batch_end = batch_start.saturating_add(PARALLEL_BATCH).min(self.range.end);
                let batch: Vec<RoundTrip> = (batch_start..batch_end)
                    .into_par_iter()
                    .map(RoundTrip::compute)
                    .collect();
                for trip in batch {
                    sink(&trip)?;
                    report.record(trip);
                }
                batch_start = batch_end;
            }
        } else {
            for day_number in self.range.clone() {
                let trip = RoundTrip::compute(day_number);
                sink(&trip)?;
                report.record(trip);
            }
        }

        info!(
            checked = report.checked,
            mismatches = report.mismatches.len(),
            "round-trip verification finished"
        );
        Ok(report)
    }
}
