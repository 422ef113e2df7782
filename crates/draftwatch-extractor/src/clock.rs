//! Date source for `dateReported`

use chrono::{NaiveDate, Utc};

/// Supplies the current date to the extractor
pub trait Clock {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Wall clock, reporting the UTC calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one date, for reproducible output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
