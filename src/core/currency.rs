//! Currency conversion abstractions

use super::error::{FxError, FxResult};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

/// Units of each currency per one unit of the base currency.
pub type RateTable = BTreeMap<String, f64>;

/// Currencies offered as display options, independent of what is priced.
pub const SUPPORTED_CURRENCIES: [&str; 17] = [
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "INR", "BRL", "MXN", "RUB", "ZAR",
    "THB", "VND", "AED", "ARS",
];

/// Fetches the latest rate table for a single base currency.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Base currency every returned rate is quoted against.
    fn base_currency(&self) -> &str;

    async fn fetch_rates(&self) -> FxResult<RateTable>;
}

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    /// Validates raw request parameters as received from a query string or CLI.
    pub fn parse(amount: Option<&str>, from: Option<&str>, to: Option<&str>) -> FxResult<Self> {
        let amount = amount
            .and_then(|a| a.trim().parse::<f64>().ok())
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or_else(|| FxError::InvalidInput("Invalid amount".to_string()))?;

        fn code(c: Option<&str>) -> Option<&str> {
            c.map(str::trim).filter(|c| !c.is_empty())
        }

        // Codes keep their case; the converter decides how each one is compared.
        match (code(from), code(to)) {
            (Some(from), Some(to)) => Ok(Self {
                amount,
                from: from.to_string(),
                to: to.to_string(),
            }),
            _ => Err(FxError::InvalidInput(
                "from and to currencies are required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: String,
    pub to: String,
    /// Rounded to two decimal places.
    pub converted: f64,
    /// Raw rate used for the conversion.
    pub rate: f64,
}

/// Rounds half away from zero to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
