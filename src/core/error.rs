//! Error types for currency conversion and the product catalog.

use thiserror::Error;

/// Errors raised while converting an amount between currencies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    /// Malformed amount or missing currency codes.
    #[error("{0}")]
    InvalidInput(String),

    /// Conversions may only start from the configured base currency.
    #[error("Base currency must be {base}. Please convert from {base} first.")]
    UnsupportedBaseCurrency { from: String, base: String },

    /// Target currency is absent from the current rate table.
    #[error("Currency {0} is not supported")]
    UnsupportedCurrency(String),

    /// Upstream fetch failed and no cached table exists.
    #[error("Exchange rates unavailable: {0}")]
    SourceUnavailable(String),
}

impl FxError {
    /// True for failures caused by the caller's request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FxError::SourceUnavailable(_))
    }
}

/// Errors raised by the visa product catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Visa product with ID {0} not found")]
    NotFound(String),

    #[error("{0}")]
    Invalid(String),
}

pub type FxResult<T> = Result<T, FxError>;
pub type CatalogResult<T> = Result<T, CatalogError>;
