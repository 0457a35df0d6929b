//! Unit tests for the signal engine

use chrono::{Duration, TimeZone, Utc};
use equisight::models::analysis::{AssetMetrics, Recommendation, RiskProfile};
use equisight::models::price::{PriceBar, PriceSeries};
use equisight::signals::engine::{SignalEngine, MIN_BARS};

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap();
    let mut series = PriceSeries::new();
    for (i, &close) in closes.iter().enumerate() {
        series.push(PriceBar::new(
            start + Duration::days(i as i64),
            close,
            close + 0.5,
            close - 0.5,
            close,
            1_000.0,
        ));
    }
    series
}

/// 200 rising bars, then 50 oscillating near the top so the final RSI
/// window sees balanced gains and losses.
fn uptrend_series() -> PriceSeries {
    let mut closes: Vec<f64> = (0..200).map(|i| 100.0 + i as f64 * 0.5).collect();
    closes.extend((0..50).map(|i| if i % 2 == 0 { 200.0 } else { 201.0 }));
    series_from_closes(&closes)
}

/// Mirror image: 200 falling bars, then the same oscillation.
fn downtrend_series() -> PriceSeries {
    let mut closes: Vec<f64> = (0..200).map(|i| 300.0 - i as f64 * 0.5).collect();
    closes.extend((0..50).map(|i| if i % 2 == 0 { 200.0 } else { 201.0 }));
    series_from_closes(&closes)
}

#[test]
fn insufficient_data_returns_sentinel() {
    let series = series_from_closes(&[100.0; 10]);
    let result = SignalEngine::analyze_ticker("AAPL", &series, RiskProfile::Aggressive);

    assert_eq!(result.ticker, "AAPL");
    assert_eq!(result.score, 0.0);
    assert_eq!(result.recommendation, Recommendation::NotAvailable);
    assert_eq!(result.reasoning, vec!["Insufficient Data".to_string()]);
    assert_eq!(result.metrics, AssetMetrics::default());
    assert_eq!(result.risk_profile, RiskProfile::Aggressive);
}

#[test]
fn empty_series_returns_sentinel() {
    let result =
        SignalEngine::analyze_ticker("AAPL", &PriceSeries::new(), RiskProfile::Moderate);
    assert_eq!(result.recommendation, Recommendation::NotAvailable);
}

#[test]
fn guard_boundary_is_min_bars() {
    let short = series_from_closes(&vec![100.0; MIN_BARS - 1]);
    let result = SignalEngine::analyze_ticker("T", &short, RiskProfile::Moderate);
    assert_eq!(result.recommendation, Recommendation::NotAvailable);

    let enough = series_from_closes(&vec![100.0; MIN_BARS]);
    let result = SignalEngine::analyze_ticker("T", &enough, RiskProfile::Moderate);
    assert_ne!(result.recommendation, Recommendation::NotAvailable);
}

#[test]
fn uptrend_recommends_buy_with_golden_cross() {
    let result = SignalEngine::analyze_ticker("UP", &uptrend_series(), RiskProfile::Moderate);

    assert_eq!(result.recommendation, Recommendation::Buy);
    assert!(result
        .reasoning
        .contains(&"Golden Cross (Bullish Trend)".to_string()));
    assert!(result
        .reasoning
        .contains(&"Price above SMA 200 (Long-term Bullish)".to_string()));
}

#[test]
fn downtrend_recommends_sell_with_death_cross() {
    let result =
        SignalEngine::analyze_ticker("DOWN", &downtrend_series(), RiskProfile::Moderate);

    assert_eq!(result.recommendation, Recommendation::Sell);
    assert!(result
        .reasoning
        .contains(&"Death Cross (Bearish Trend)".to_string()));
    assert!(result
        .reasoning
        .contains(&"Price below SMA 200 (Long-term Bearish)".to_string()));
}

#[test]
fn uptrend_scores_at_least_as_high_as_downtrend() {
    for profile in [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ] {
        let up = SignalEngine::analyze_ticker("UP", &uptrend_series(), profile);
        let down = SignalEngine::analyze_ticker("DOWN", &downtrend_series(), profile);
        assert!(
            up.score >= down.score,
            "{profile}: uptrend {} < downtrend {}",
            up.score,
            down.score
        );
    }
}

#[test]
fn short_history_reads_long_term_bearish() {
    // 50 bars: SMA 50 is defined, SMA 200 is not, so there is no cross
    // signal and the price rule falls to its bearish arm
    let closes: Vec<f64> = (0..MIN_BARS).map(|i| 100.0 + i as f64).collect();
    let series = series_from_closes(&closes);
    let result = SignalEngine::analyze_ticker("NEW", &series, RiskProfile::Moderate);

    assert!(result
        .reasoning
        .contains(&"Price below SMA 200 (Long-term Bearish)".to_string()));
    assert!(!result
        .reasoning
        .iter()
        .any(|r| r.contains("Golden Cross") || r.contains("Death Cross")));
    // the score snapshot substitutes 0.0 for the missing SMA 200
    assert_eq!(result.metrics.sma_200, 0.0);
}

#[test]
fn pure_uptrend_rsi_reads_overbought() {
    let closes: Vec<f64> = (0..250).map(|i| 100.0 + i as f64 * 0.5).collect();
    let result = SignalEngine::analyze_ticker(
        "RAMP",
        &series_from_closes(&closes),
        RiskProfile::Moderate,
    );

    assert_eq!(result.metrics.rsi, 100.0);
    assert!(result
        .reasoning
        .iter()
        .any(|r| r.starts_with("RSI Overbought")));
    // +1 golden cross, +1 above SMA 200, -2 overbought -> Hold
    assert_eq!(result.recommendation, Recommendation::Hold);
}

#[test]
fn unknown_profile_name_behaves_as_moderate() {
    assert_eq!(RiskProfile::from_name("YOLO"), RiskProfile::Moderate);
    assert_eq!(RiskProfile::from_name("Conservative"), RiskProfile::Conservative);

    let series = uptrend_series();
    let fallback =
        SignalEngine::analyze_ticker("X", &series, RiskProfile::from_name("nonsense"));
    let moderate = SignalEngine::analyze_ticker("X", &series, RiskProfile::Moderate);
    assert_eq!(fallback.score, moderate.score);
}

#[test]
fn metrics_snapshot_matches_series_tail() {
    let result = SignalEngine::analyze_ticker("UP", &uptrend_series(), RiskProfile::Moderate);
    let metrics = result.metrics;

    assert_eq!(metrics.current_price, 201.0);
    assert!(metrics.total_return > 1.0);
    assert!(metrics.volatility > 0.0);
    assert!(metrics.max_drawdown <= 0.0);
    assert!(metrics.sma_50 > metrics.sma_200);
}
