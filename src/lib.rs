pub mod api;
pub mod cli;
pub mod core;
pub mod providers;

use crate::core::catalog::ProductQuery;
use crate::core::{CurrencyConverter, RateCache, VisaCatalog, config::AppConfig};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Serve,
    Convert {
        amount: String,
        from: String,
        to: String,
    },
    Currencies,
    Products(ProductQuery),
}

/// Wires the rate source, cache, converter and catalog from configuration.
///
/// One rate cache is created per call and shared by everything built here.
pub fn build_state(config: &AppConfig) -> Result<Arc<api::AppState>> {
    let source = providers::ExchangeRateApiSource::new(
        &config.rates.base_url,
        &config.rates.base_currency,
        config.rates.timeout(),
    )?;
    let cache = Arc::new(RateCache::new(Arc::new(source), config.rates.ttl()));
    debug!(
        base = %cache.base_currency(),
        ttl = ?cache.ttl(),
        "Created exchange rate cache"
    );

    Ok(Arc::new(api::AppState {
        converter: Arc::new(CurrencyConverter::new(cache)),
        catalog: Arc::new(VisaCatalog::seeded()),
    }))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Visa desk starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let state = build_state(&config)?;

    match command {
        AppCommand::Serve => api::serve(config.server.listen_addr, state).await,
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&state.converter, &amount, &from, &to).await
        }
        AppCommand::Currencies => cli::convert::run_currencies(&state.converter),
        AppCommand::Products(query) => cli::products::run(&state.catalog, &query).await,
    }
}
