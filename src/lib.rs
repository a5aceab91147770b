#![doc(test(attr(deny(warnings))))]

//! Budget Tracker keeps a session's worth of dated records (money spent or
//! calories eaten) and reports today's and the last week's totals against a
//! daily limit.
//!
//! ```
//! use budget_tracker::{CashCalculator, Record};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 9, 23).unwrap();
//! let mut cash = CashCalculator::new(1000.0);
//! cash.add_record(Record::on(300.0, "lunch", today));
//! assert_eq!(
//!     cash.today_cash_remained("rub", today).unwrap(),
//!     "You have 700 rubles left for today."
//! );
//! ```

pub mod calculator;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod time;
pub mod utils;

pub use calculator::{Calculator, CaloriesCalculator, CashCalculator, Reporter};
pub use currency::Currency;
pub use domain::{Record, WeekWindow};
pub use errors::{Result, TrackerError};
pub use time::{Clock, FixedClock, SystemClock};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
