//! HTTP provider for a chart-style history endpoint.

use crate::models::price::{Period, PriceBar, PriceSeries};
use crate::services::provider::{HistoryProvider, ProviderError};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Per-request timeout; a slow provider degrades to a fetch failure
/// instead of hanging the batch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ChartApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl ChartApiProvider {
    pub fn new() -> Self {
        Self::with_client(DEFAULT_BASE_URL, reqwest::Client::new())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Inject the HTTP client and endpoint, e.g. to point at a mock server.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

impl Default for ChartApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryProvider for ChartApiProvider {
    async fn fetch_history(
        &self,
        ticker: &str,
        period: Period,
    ) -> Result<PriceSeries, ProviderError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, ticker, period
        );
        debug!(ticker, %period, "requesting chart history");

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;
        let payload: ChartResponse = response.json().await?;

        let result = payload
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(ProviderError::Empty)?;
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Decode("missing quote columns".to_string()))?;
        if quote.close.is_empty() {
            return Err(ProviderError::Empty);
        }

        let mut series = PriceSeries::new();
        for (i, &secs) in result.timestamp.iter().enumerate() {
            // rows with no close carry no information; drop them
            let Some(close) = column_value(&quote.close, i) else {
                continue;
            };
            let timestamp = Utc
                .timestamp_opt(secs, 0)
                .single()
                .ok_or_else(|| ProviderError::Decode(format!("invalid timestamp {secs}")))?;
            series.push(PriceBar {
                timestamp,
                open: column_value(&quote.open, i).unwrap_or(close),
                high: column_value(&quote.high, i).unwrap_or(close),
                low: column_value(&quote.low, i).unwrap_or(close),
                close,
                volume: column_value(&quote.volume, i).unwrap_or(0.0),
            });
        }

        if series.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(series)
    }
}

fn column_value(column: &[Option<f64>], index: usize) -> Option<f64> {
    column.get(index).copied().flatten()
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize, Default)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}
