//! Money reports: spending totals and what is left of today's budget.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{Calculator, Reporter};
use crate::currency::Currency;
use crate::domain::Record;
use crate::errors::Result;
use crate::time::Clock;

const NO_MONEY_LEFT: &str = "No money left, hang in there!";

/// Tracks money spent in rubles.
#[derive(Debug, Clone)]
pub struct CashCalculator {
    inner: Calculator,
}

impl CashCalculator {
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

    /// "Spent today: {amount} rubles."
    pub fn today_stats(&self, today: NaiveDate) -> Result<String> {
        let spent = self.inner.today_stats(today)?;
        Ok(format!("Spent today: {spent} rubles."))
    }

    /// Remaining budget or debt for `today`, with the currency given as a
    /// selector string (`rub`, `usd` or `eur`).
    pub fn today_cash_remained(&self, currency: &str, today: NaiveDate) -> Result<String> {
        let currency: Currency = currency.parse()?;
        self.remained_in(currency, today)
    }

    /// Remaining budget or debt for `today`, expressed in `currency`.
    pub fn remained_in(&self, currency: Currency, today: NaiveDate) -> Result<String> {
        let spent = self.inner.today_stats(today)?;
        let limit = self.inner.limit();
        let unit = currency.unit_name();
        let message = if limit > spent {
            let remaining = currency.render(limit - spent);
            format!("You have {remaining} {unit} left for today.")
        } else if limit < spent {
            let debt = currency.render(spent - limit);
            format!("{NO_MONEY_LEFT} Your debt is {debt} {unit}.")
        } else {
            NO_MONEY_LEFT.to_string()
        };
        Ok(message)
    }

    /// "Spent over the last week: {amount} rub."
    pub fn week_stats(&self, today: NaiveDate) -> Result<String> {
        let spent = self.inner.week_stats(today)?;
        Ok(format!("Spent over the last week: {spent} rub."))
    }
}

impl From<Calculator> for CashCalculator {
    fn from(inner: Calculator) -> Self {
        Self { inner }
    }
}

impl Reporter for CashCalculator {
    type Selector = Currency;

    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }

    fn today_summary(&self, today: NaiveDate) -> Result<String> {
        self.today_stats(today)
    }

    fn remaining(&self, currency: Currency, today: NaiveDate) -> Result<String> {
        self.remained_in(currency, today)
    }

    fn week_summary(&self, today: NaiveDate) -> Result<String> {
        self.week_stats(today)
    }
}
