//! Market data provider boundary.

use crate::models::price::{Period, PriceSeries};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed provider response: {0}")]
    Decode(String),
    #[error("no price data returned")]
    Empty,
}

/// Source of daily OHLCV history for a ticker.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    async fn fetch_history(
        &self,
        ticker: &str,
        period: Period,
    ) -> Result<PriceSeries, ProviderError>;
}
