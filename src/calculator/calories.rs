use std::sync::Arc;

use chrono::NaiveDate;

use super::{Calculator, Reporter};
use crate::domain::Record;
use crate::errors::Result;
use crate::time::Clock;

const STOP_EATING: &str = "Stop eating!";

/// Tracks calorie intake in kCal.
#[derive(Debug, Clone)]
pub struct CaloriesCalculator {
    inner: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: f64) -> Self {
        Self {
            inner: Calculator::new(limit),
        }
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
        }
    }

    pub fn add_record(&mut self, record: Record) {
        self.inner.add_record(record);
    }

    pub fn today_stats(&self, today: NaiveDate) -> Result<String> {
        let eaten = self.inner.today_stats(today)?;
        Ok(format!("Received today: {eaten} kCal"))
    }

    /// Allowance left for `today`; reaching or passing the limit yields a flat refusal.
    pub fn calories_remained(&self, today: NaiveDate) -> Result<String> {
        let eaten = self.inner.today_stats(today)?;
        let limit = self.inner.limit();
        if limit > eaten {
            let remaining = limit - eaten;
            Ok(format!("You may still eat up to {remaining} kCal today"))
        } else {
            Ok(STOP_EATING.to_string())
        }
    }

    pub fn week_stats(&self, today: NaiveDate) -> Result<String> {
        let eaten = self.inner.week_stats(today)?;
        Ok(format!("Received over the last week: {eaten} kCal."))
    }
}

impl From<Calculator> for CaloriesCalculator {
    fn from(inner: Calculator) -> Self {
        Self { inner }
    }
}

impl Reporter for CaloriesCalculator {
    type Selector = ();

    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }

    fn today_summary(&self, today: NaiveDate) -> Result<String> {
        self.today_stats(today)
    }

    fn remaining(&self, _: (), today: NaiveDate) -> Result<String> {
        self.calories_remained(today)
    }

    fn week_summary(&self, today: NaiveDate) -> Result<String> {
        self.week_stats(today)
    }
}
