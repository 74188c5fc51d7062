//! Calendar date ranges

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range
///
/// Used by the reporting queries for analysis windows and for the booking
/// overlap test: two ranges conflict when each one starts no later than the
/// other ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start date (inclusive)
    pub start: NaiveDate,

    /// End date (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a date range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of whole days spanned, end-exclusive (a same-day range is 0)
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Check whether a date falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Interval-overlap test against a booking window
    ///
    /// A booking [pickup, return] overlaps this range when
    /// `pickup <= end && return >= start`.
    pub fn overlaps(&self, pickup: NaiveDate, return_date: NaiveDate) -> bool {
        pickup <= self.end && return_date >= self.start
    }
}
