use std::result::Result as StdResult;

use thiserror::Error;

use crate::config::ConfigError;

/// Error type shared by the calculators, currency table and configuration layer.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid date format: `{date}` (expected dd.mm.yyyy)")]
    InvalidDateFormat {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = StdResult<T, TrackerError>;
