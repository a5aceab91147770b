//! A single dated transaction: money spent or calories eaten.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};
use crate::time::{self, Clock, SystemClock};

/// One entry fed into a calculator.
///
/// Fields are fixed at construction. The date is kept exactly as given and only
/// parsed when a calculator aggregates, so a malformed date surfaces as
/// [`TrackerError::InvalidDateFormat`] at that point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    amount: f64,
    comment: String,
    date: String,
}

impl Record {
    /// Creates a record dated today according to the system clock.
    pub fn new(amount: f64, comment: impl Into<String>) -> Self {
        Self::stamped(amount, comment, &SystemClock)
    }

    /// Creates a record dated today according to `clock`.
    pub fn stamped(amount: f64, comment: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::on(amount, comment, clock.today())
    }

    /// Creates a record for a typed calendar date.
    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self::with_date(amount, comment, time::format_date(date))
    }

    /// Creates a record with a caller-supplied `dd.mm.yyyy` date string, accepted as-is.
    pub fn with_date(amount: f64, comment: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date: date.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Parses the stored date string.
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        time::parse_date(&self.date).map_err(|source| {
            tracing::warn!(date = %self.date, comment = %self.comment, "record date failed to parse");
            TrackerError::InvalidDateFormat {
                date: self.date.clone(),
                source,
            }
        })
    }
}
