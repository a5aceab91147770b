//! Record keeping and aggregation against a daily limit.
//!
//! [`Calculator`] owns the records and produces raw totals. The money and
//! calorie reporters wrap it and turn those totals into sentences.

pub mod calories;
pub mod cash;
pub mod report;

pub use calories::CaloriesCalculator;
pub use cash::CashCalculator;
pub use report::Reporter;

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Record, WeekWindow};
use crate::errors::Result;
use crate::time::{Clock, SystemClock};

/// Holds a limit and every record added during a session.
#[derive(Clone)]
pub struct Calculator {
    limit: f64,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl Calculator {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    /// Uses `clock` to resolve "today" for the `*_now` helpers.
    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Today's date according to the calculator's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn add_record(&mut self, record: Record) {
        debug!(
            amount = record.amount(),
            date = record.date(),
            comment = record.comment(),
            "adding record"
        );
        self.records.push(record);
    }

    /// Sum of amounts recorded on `today`.
    pub fn today_stats(&self, today: NaiveDate) -> Result<f64> {
        let total = self.sum_where(|date| date == today)?;
        debug!(%today, total, "aggregated today");
        Ok(total)
    }

    /// Sum of amounts recorded during the seven days ending on `today`.
    pub fn week_stats(&self, today: NaiveDate) -> Result<f64> {
        let window = WeekWindow::ending(today);
        let total = self.sum_where(|date| window.contains(date))?;
        debug!(%window, total, "aggregated week");
        Ok(total)
    }

    pub fn today_stats_now(&self) -> Result<f64> {
        self.today_stats(self.today())
    }

    pub fn week_stats_now(&self) -> Result<f64> {
        self.week_stats(self.today())
    }

    // Every stored date is parsed, matching or not: one bad record fails the whole sum.
    fn sum_where(&self, mut include: impl FnMut(NaiveDate) -> bool) -> Result<f64> {
        let mut total = 0.0;
        for record in &self.records {
            if include(record.parsed_date()?) {
                total += record.amount();
            }
        }
        Ok(total)
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
