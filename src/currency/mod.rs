use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Rubles per US dollar.
pub const USD_RATE: f64 = 85.5;
/// Rubles per euro.
pub const EUR_RATE: f64 = 96.4;

/// Currencies a cash report can be expressed in. Amounts are always recorded in rubles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    /// Rubles per one unit of this currency.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Rub => 1.0,
            Currency::Usd => USD_RATE,
            Currency::Eur => EUR_RATE,
        }
    }

    /// Plural unit name used inside report sentences.
    pub fn unit_name(self) -> &'static str {
        match self {
            Currency::Rub => "rubles",
            Currency::Usd => "dollars",
            Currency::Eur => "euros",
        }
    }

    /// Lowercase selector accepted by [`FromStr`].
    pub fn code(self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
        }
    }

    /// Converts a ruble amount into this currency.
    ///
    /// Rubles pass through untouched; foreign currencies are divided by their rate
    /// and rounded to two decimal places.
    pub fn convert(self, rubles: f64) -> f64 {
        match self {
            Currency::Rub => rubles,
            other => round_to_cents(rubles / other.rate()),
        }
    }

    /// Converts a ruble amount and renders it for a report sentence.
    ///
    /// Rubles are interpolated as-is; foreign amounts always show two decimals.
    pub fn render(self, rubles: f64) -> String {
        match self {
            Currency::Rub => rubles.to_string(),
            other => format!("{:.2}", other.convert(rubles)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "rub" => Ok(Currency::Rub),
            "usd" => Ok(Currency::Usd),
            "eur" => Ok(Currency::Eur),
            other => {
                tracing::warn!(selector = other, "rejected currency selector");
                Err(TrackerError::UnsupportedCurrency(other.to_string()))
            }
        }
    }
}

/// Rounds to two decimal places, exact ties going to the even cent.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_selectors() {
        for currency in Currency::ALL {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn rejects_unknown_selector() {
        let err = "gbp".parse::<Currency>().expect_err("gbp is not supported");
        assert!(matches!(err, TrackerError::UnsupportedCurrency(ref code) if code == "gbp"));
    }

    #[test]
    fn selectors_are_case_sensitive() {
        assert!("USD".parse::<Currency>().is_err());
    }

    #[test]
    fn converts_with_fixed_rates() {
        assert_eq!(Currency::Rub.convert(700.0), 700.0);
        assert_eq!(Currency::Usd.convert(200.0), 2.34);
        assert_eq!(Currency::Eur.convert(700.0), 7.26);
    }

    #[test]
    fn exact_ties_round_to_even_cent() {
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(Currency::Usd.convert(10.6875), 0.12);
    }

    #[test]
    fn render_keeps_two_decimals_for_foreign_amounts() {
        assert_eq!(Currency::Usd.render(171.0), "2.00");
        assert_eq!(Currency::Usd.render(0.1), "0.00");
        assert_eq!(Currency::Eur.render(700.0), "7.26");
        assert_eq!(Currency::Rub.render(700.0), "700");
        assert_eq!(Currency::Rub.render(0.1), "0.1");
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&Currency::Eur).unwrap();
        assert_eq!(json, "\"eur\"");
        let parsed: Currency = serde_json::from_str("\"usd\"").unwrap();
        assert_eq!(parsed, Currency::Usd);
    }
}
