use equisight::cache::SqliteCache;
use equisight::config::Config;
use equisight::models::analysis::{RiskProfile, Watchlist};
use equisight::models::price::Period;
use equisight::report;
use equisight::services::{ChartApiProvider, DataFetcher};
use equisight::signals::SignalEngine;
use tracing::warn;

#[tokio::main]
async fn main() {
    equisight::logging::init_logging();
    let config = Config::from_env();

    let provider = ChartApiProvider::with_base_url(config.chart_api_base_url.clone());
    let mut fetcher = DataFetcher::new(provider);
    match SqliteCache::open(&config.cache_db_path, config.cache_ttl_hours) {
        Ok(cache) => fetcher = fetcher.with_cache(cache),
        Err(e) => warn!(error = %e, "cache unavailable, fetching without it"),
    }

    let watchlist = Watchlist {
        name: "Demo".to_string(),
        tickers: vec![
            "AAPL".to_string(),
            "MSFT".to_string(),
            "SPY".to_string(),
            "TSLA".to_string(),
        ],
    };
    let period = Period::default();
    let profile = RiskProfile::Moderate;

    let histories = fetcher.get_batch_history(&watchlist.tickers, period).await;

    let mut results = Vec::new();
    for ticker in &watchlist.tickers {
        if let Some(series) = histories.get(ticker) {
            results.push(SignalEngine::analyze_ticker(ticker, series, profile));
        }
    }

    let ranked = report::rank(results);
    for result in &ranked {
        println!(
            "{} [{}] score {:.1} ({})",
            result.ticker, result.recommendation, result.score, result.risk_profile
        );
        for reason in &result.reasoning {
            println!("  - {}", reason);
        }
    }

    println!();
    print!("{}", report::to_csv(&ranked));
}
