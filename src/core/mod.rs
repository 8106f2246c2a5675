//! Core business logic: rate caching, conversion and the product catalog

pub mod cache;
pub mod catalog;
pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod log;
mod seed;

// Re-export main types for cleaner imports
pub use cache::{Freshness, RateCache, RateSnapshot};
pub use catalog::{EntryType, NewVisaProduct, ProductQuery, VisaCatalog, VisaProduct};
pub use convert::CurrencyConverter;
pub use currency::{ConversionRequest, ConversionResult, RateSource, RateTable};
pub use error::{CatalogError, FxError};
