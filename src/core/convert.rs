//! Conversion from the base currency using cached rates.

use super::cache::RateCache;
use super::currency::{ConversionResult, SUPPORTED_CURRENCIES, round_cents};
use super::error::{FxError, FxResult};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct CurrencyConverter {
    cache: Arc<RateCache>,
}

impl CurrencyConverter {
    pub fn new(cache: Arc<RateCache>) -> Self {
        Self { cache }
    }

    pub fn base_currency(&self) -> &str {
        self.cache.base_currency()
    }

    /// Converts `amount` from `from` into `to`.
    ///
    /// `from` is compared exactly as given: identical codes short-circuit
    /// before the base currency check, so `EUR -> EUR` succeeds even though
    /// only base-currency conversions are otherwise accepted, while `usd` is
    /// not the base `USD`. `to` is looked up case-insensitively. Both codes are
    /// upper-cased in the result. `amount` is expected to be a validated,
    /// non-negative number.
    #[instrument(name = "Convert", skip(self))]
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> FxResult<ConversionResult> {
        let (from, to) = (from.trim(), to.trim());

        if from == to {
            return Ok(ConversionResult {
                amount,
                from: from.to_uppercase(),
                to: to.to_uppercase(),
                converted: amount,
                rate: 1.0,
            });
        }

        let base = self.base_currency();
        if from != base {
            return Err(FxError::UnsupportedBaseCurrency {
                from: from.to_string(),
                base: base.to_string(),
            });
        }

        let to = to.to_uppercase();
        let rates = self.cache.get_rates().await?;
        let rate = *rates
            .get(&to)
            .ok_or_else(|| FxError::UnsupportedCurrency(to.clone()))?;

        let converted = round_cents(amount * rate);
        debug!(rate, converted, "Converted amount");
        Ok(ConversionResult {
            amount,
            from: from.to_string(),
            to,
            converted,
            rate,
        })
    }

    /// Currencies offered to users, regardless of which ones are currently priced.
    pub fn supported_currencies(&self) -> Vec<String> {
        SUPPORTED_CURRENCIES.iter().map(|c| c.to_string()).collect()
    }
}
