//! Time-bounded exchange rate cache with stale fallback.

use super::currency::{RateSource, RateTable};
use super::error::{FxError, FxResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Rate table from the last successful fetch.
struct CacheEntry {
    rates: Arc<RateTable>,
    base: String,
    fetched_at: Instant,
}

/// How a rate table was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Served from cache within the TTL.
    Fresh,
    /// Fetched from the source by this call.
    Refreshed,
    /// Refresh failed, served from an expired entry.
    Stale,
}

/// Rate table returned by [`RateCache::snapshot`] together with its freshness.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    pub rates: Arc<RateTable>,
    pub freshness: Freshness,
}

/// Time-bounded cache of the rate table with stale fallback.
///
/// Refresh happens lazily on the first read after the TTL expires. The lock
/// is not held while the source is queried, so concurrent readers that see an
/// expired entry may each fetch; the last successful write wins. A fetch that
/// fails after another reader refreshed the entry serves that fresh entry.
pub struct RateCache {
    source: Arc<dyn RateSource>,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl RateCache {
    pub fn new(source: Arc<dyn RateSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: Mutex::new(None),
        }
    }

    pub fn base_currency(&self) -> &str {
        self.source.base_currency()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the current rate table, refreshing it when expired.
    pub async fn get_rates(&self) -> FxResult<Arc<RateTable>> {
        self.snapshot().await.map(|snapshot| snapshot.rates)
    }

    /// Like [`RateCache::get_rates`] but also reports where the table came from.
    #[instrument(name = "RateCacheLookup", skip(self), fields(base = %self.base_currency()))]
    pub async fn snapshot(&self) -> FxResult<RateSnapshot> {
        {
            let entry = self.entry.lock().await;
            if let Some(cached) = entry.as_ref() {
                if cached.fetched_at.elapsed() < self.ttl {
                    debug!("Rate cache HIT");
                    return Ok(RateSnapshot {
                        rates: Arc::clone(&cached.rates),
                        freshness: Freshness::Fresh,
                    });
                }
                debug!(age = ?cached.fetched_at.elapsed(), "Rate cache entry expired");
            } else {
                debug!("Rate cache MISS");
            }
        }

        match self.source.fetch_rates().await {
            Ok(table) => {
                let rates = Arc::new(table);
                let mut entry = self.entry.lock().await;
                *entry = Some(CacheEntry {
                    rates: Arc::clone(&rates),
                    base: self.base_currency().to_string(),
                    fetched_at: Instant::now(),
                });
                info!(count = rates.len(), "Exchange rates updated successfully");
                Ok(RateSnapshot {
                    rates,
                    freshness: Freshness::Refreshed,
                })
            }
            Err(err) => {
                error!(error = %err, "Failed to fetch exchange rates");
                let entry = self.entry.lock().await;
                match entry.as_ref() {
                    // Another reader refreshed the entry while this fetch was in flight.
                    Some(cached) if cached.fetched_at.elapsed() < self.ttl => {
                        debug!("Rate cache refreshed concurrently");
                        Ok(RateSnapshot {
                            rates: Arc::clone(&cached.rates),
                            freshness: Freshness::Fresh,
                        })
                    }
                    Some(stale) => {
                        warn!(
                            base = %stale.base,
                            age = ?stale.fetched_at.elapsed(),
                            "Using stale cached exchange rates"
                        );
                        Ok(RateSnapshot {
                            rates: Arc::clone(&stale.rates),
                            freshness: Freshness::Stale,
                        })
                    }
                    None => Err(match err {
                        FxError::SourceUnavailable(_) => err,
                        other => FxError::SourceUnavailable(other.to_string()),
                    }),
                }
            }
        }
    }
}
