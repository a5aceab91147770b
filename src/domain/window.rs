use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days covered by a weekly report, today included.
pub const WEEK_DAYS: i64 = 7;

/// Inclusive range of calendar days ending on a reference date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The seven days `[today - 6, today]`, clamped at the earliest representable date.
    pub fn ending(today: NaiveDate) -> Self {
        let start = today
            .checked_sub_signed(Duration::days(WEEK_DAYS - 1))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for WeekWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_spans_seven_days_inclusive() {
        let window = WeekWindow::ending(day(2025, 3, 10));
        assert_eq!(window.start, day(2025, 3, 4));
        assert!(window.contains(day(2025, 3, 4)));
        assert!(window.contains(day(2025, 3, 10)));
        assert!(!window.contains(day(2025, 3, 3)));
        assert!(!window.contains(day(2025, 3, 11)));
    }

    #[test]
    fn window_clamps_near_earliest_date() {
        let today = NaiveDate::MIN + Duration::days(2);
        let window = WeekWindow::ending(today);
        assert_eq!(window.start, NaiveDate::MIN);
        assert!(window.contains(NaiveDate::MIN));
        assert!(window.contains(today));
    }

    #[test]
    fn window_crosses_year_boundary() {
        let window = WeekWindow::ending(day(2025, 1, 2));
        assert_eq!(window.start, day(2024, 12, 27));
    }
}
