//! Fetcher tests against a mocked chart endpoint

use equisight::cache::SqliteCache;
use equisight::models::price::Period;
use equisight::services::{ChartApiProvider, DataFetcher, HistoryProvider};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chart_body(closes: &[f64]) -> Value {
    let timestamps: Vec<i64> = (0..closes.len())
        .map(|i| 1_700_000_000 + i as i64 * 86_400)
        .collect();
    let volumes = vec![1_000.0; closes.len()];
    json!({
        "chart": {
            "result": [{
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": closes,
                        "high": closes,
                        "low": closes,
                        "close": closes,
                        "volume": volumes
                    }]
                }
            }],
            "error": null
        }
    })
}

fn rising_closes(bars: usize) -> Vec<f64> {
    (0..bars).map(|i| 100.0 + i as f64 * 0.5).collect()
}

async fn mock_chart(server: &MockServer, ticker: &str, closes: &[f64], expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{ticker}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(closes)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn cached_fetcher(server: &MockServer, dir: &TempDir, ttl_hours: i64) -> DataFetcher<ChartApiProvider> {
    let provider = ChartApiProvider::with_client(server.uri(), reqwest::Client::new());
    let cache = SqliteCache::open(dir.path().join("cache.db"), ttl_hours).expect("open cache");
    DataFetcher::new(provider).with_cache(cache)
}

#[tokio::test]
async fn fetch_populates_cache_and_second_call_skips_network() {
    let server = MockServer::start().await;
    mock_chart(&server, "AAPL", &rising_closes(60), 1).await;
    let dir = TempDir::new().expect("temp dir");
    let fetcher = cached_fetcher(&server, &dir, 6);

    let first = fetcher
        .get_history("AAPL", Period::OneYear)
        .await
        .expect("first fetch");
    assert_eq!(first.len(), 60);

    let second = fetcher
        .get_history("AAPL", Period::OneYear)
        .await
        .expect("cache hit");
    assert_eq!(second, first);
    // mock verifies on drop that exactly one request went out
}

#[tokio::test]
async fn expired_cache_refetches() {
    let server = MockServer::start().await;
    mock_chart(&server, "AAPL", &rising_closes(60), 2).await;
    let dir = TempDir::new().expect("temp dir");
    let fetcher = cached_fetcher(&server, &dir, 0);

    assert!(fetcher.get_history("AAPL", Period::OneYear).await.is_some());
    assert!(fetcher.get_history("AAPL", Period::OneYear).await.is_some());
}

#[tokio::test]
async fn provider_error_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/FAIL"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("temp dir");
    let fetcher = cached_fetcher(&server, &dir, 6);

    assert!(fetcher.get_history("FAIL", Period::OneYear).await.is_none());
}

#[tokio::test]
async fn malformed_body_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BAD"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("temp dir");
    let fetcher = cached_fetcher(&server, &dir, 6);

    assert!(fetcher.get_history("BAD", Period::OneYear).await.is_none());
}

#[tokio::test]
async fn empty_payload_yields_none_and_is_not_cached() {
    let server = MockServer::start().await;
    mock_chart(&server, "EMPTY", &[], 2).await;
    let dir = TempDir::new().expect("temp dir");
    let fetcher = cached_fetcher(&server, &dir, 6);

    // both calls reach the network because the empty result is never cached
    assert!(fetcher.get_history("EMPTY", Period::OneYear).await.is_none());
    assert!(fetcher.get_history("EMPTY", Period::OneYear).await.is_none());
}

#[tokio::test]
async fn null_close_rows_are_dropped() {
    let server = MockServer::start().await;
    let body = json!({
        "chart": {
            "result": [{
                "timestamp": [1_700_000_000, 1_700_086_400, 1_700_172_800],
                "indicators": {
                    "quote": [{
                        "open": [100.0, null, 102.0],
                        "high": [101.0, null, 103.0],
                        "low": [99.0, null, 101.0],
                        "close": [100.5, null, 102.5],
                        "volume": [1_000.0, null, 1_200.0]
                    }]
                }
            }],
            "error": null
        }
    });
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/GAPPY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = ChartApiProvider::with_client(server.uri(), reqwest::Client::new());
    let series = provider
        .fetch_history("GAPPY", Period::OneMonth)
        .await
        .expect("fetch");
    assert_eq!(series.len(), 2);
    assert_eq!(series.closes(), vec![100.5, 102.5]);
}

#[tokio::test]
async fn batch_isolation_omits_failing_ticker() {
    let server = MockServer::start().await;
    mock_chart(&server, "AAPL", &rising_closes(60), 1).await;
    mock_chart(&server, "MSFT", &rising_closes(60), 1).await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/FAIL"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("temp dir");
    let fetcher = cached_fetcher(&server, &dir, 6);

    let tickers = vec![
        "AAPL".to_string(),
        "FAIL".to_string(),
        "MSFT".to_string(),
    ];
    let histories = fetcher.get_batch_history(&tickers, Period::OneYear).await;

    assert_eq!(histories.len(), 2);
    assert!(histories.contains_key("AAPL"));
    assert!(histories.contains_key("MSFT"));
    assert!(!histories.contains_key("FAIL"));
}

#[tokio::test]
async fn fetch_without_cache_still_works() {
    let server = MockServer::start().await;
    mock_chart(&server, "AAPL", &rising_closes(60), 2).await;
    let provider = ChartApiProvider::with_client(server.uri(), reqwest::Client::new());
    let fetcher = DataFetcher::new(provider);

    assert!(fetcher.get_history("AAPL", Period::OneYear).await.is_some());
    assert!(fetcher.get_history("AAPL", Period::OneYear).await.is_some());
}
