//! Accounting cycle value type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive date range covering one accounting period
///
/// Always built by the cycle resolver, so `start_date <= end_date` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CyclePeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CyclePeriod {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Check if a date falls within this cycle
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of days in the cycle, both ends counted
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl fmt::Display for CyclePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}
