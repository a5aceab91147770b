//! Plain data types shared by the calculators. No I/O.

pub mod record;
pub mod window;

pub use record::Record;
pub use window::{WeekWindow, WEEK_DAYS};
