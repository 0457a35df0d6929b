//! Cache-first history fetching.

use crate::cache::PriceStore;
use crate::models::price::{Period, PriceSeries};
use crate::services::provider::HistoryProvider;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Wraps a provider with best-effort caching. Provider failures, empty
/// responses, and cache trouble all degrade to `None` for the affected
/// ticker; nothing here raises.
pub struct DataFetcher<P: HistoryProvider> {
    provider: P,
    cache: Option<Box<dyn PriceStore + Send + Sync>>,
}

impl<P: HistoryProvider> DataFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: impl PriceStore + Send + Sync + 'static) -> Self {
        self.cache = Some(Box::new(cache));
        self
    }

    /// History for one ticker: cache hit short-circuits the network; a
    /// successful fetch is cached before returning.
    pub async fn get_history(&self, ticker: &str, period: Period) -> Option<PriceSeries> {
        if let Some(cache) = &self.cache {
            if let Some(series) = cache.get(ticker, period) {
                debug!(ticker, %period, bars = series.len(), "cache hit");
                return Some(series);
            }
        }

        let series = match self.provider.fetch_history(ticker, period).await {
            Ok(series) => series,
            Err(e) => {
                warn!(ticker, %period, error = %e, "history fetch failed");
                return None;
            }
        };
        if series.is_empty() {
            warn!(ticker, %period, "provider returned empty history");
            return None;
        }

        if let Some(cache) = &self.cache {
            cache.save(ticker, period, &series);
        }
        Some(series)
    }

    /// History for many tickers; failed tickers are omitted from the map.
    pub async fn get_batch_history(
        &self,
        tickers: &[String],
        period: Period,
    ) -> HashMap<String, PriceSeries> {
        let mut results = HashMap::new();
        for ticker in tickers {
            if let Some(series) = self.get_history(ticker, period).await {
                results.insert(ticker.clone(), series);
            }
        }
        results
    }
}
