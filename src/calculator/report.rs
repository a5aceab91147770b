use chrono::NaiveDate;

use super::Calculator;
use crate::domain::Record;
use crate::errors::Result;

/// Shared surface of the money and calorie reporters.
///
/// Each reporter wraps a [`Calculator`] and renders its totals as sentences.
/// `Selector` carries whatever `remaining` needs beyond the date: a currency for
/// money, nothing for calories.
pub trait Reporter {
    type Selector;

    fn calculator(&self) -> &Calculator;

    fn calculator_mut(&mut self) -> &mut Calculator;

    fn today_summary(&self, today: NaiveDate) -> Result<String>;

    fn remaining(&self, selector: Self::Selector, today: NaiveDate) -> Result<String>;

    fn week_summary(&self, today: NaiveDate) -> Result<String>;

    fn add_record(&mut self, record: Record) {
        self.calculator_mut().add_record(record);
    }

    fn limit(&self) -> f64 {
        self.calculator().limit()
    }
}
