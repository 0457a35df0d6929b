//! Per-ticker analysis engine.

use crate::analysis::metrics::{
    annualized_volatility, cumulative_return, daily_returns, max_drawdown,
};
use crate::indicators::{latest, momentum, trend};
use crate::models::analysis::{AnalysisResult, AssetMetrics, Recommendation, RiskProfile};
use crate::models::price::PriceSeries;
use crate::signals::rules::{decide, evaluate_rules, RuleInputs};
use crate::signals::scoring::{composite_score, RiskWeights};
use tracing::debug;

/// Minimum history for SMA 50/200 comparisons to be meaningful.
pub const MIN_BARS: usize = 50;

pub struct SignalEngine;

impl SignalEngine {
    /// Analyze one ticker's history into metrics, a recommendation with
    /// reasons, and a composite score for the given risk profile.
    pub fn analyze_ticker(
        ticker: &str,
        series: &PriceSeries,
        profile: RiskProfile,
    ) -> AnalysisResult {
        if series.len() < MIN_BARS {
            debug!(ticker, bars = series.len(), "insufficient history");
            return Self::insufficient_data(ticker, profile);
        }

        let closes = series.closes();

        let rsi_series = momentum::rsi(&closes, 14);
        let sma_20 = trend::sma(&closes, 20);
        let sma_50 = trend::sma(&closes, 50);
        let sma_200 = trend::sma(&closes, 200);

        let returns = daily_returns(&closes);
        let volatility = annualized_volatility(&returns, true);
        let mdd = max_drawdown(&closes);
        let total_return = cumulative_return(&closes);

        let current_price = closes[closes.len() - 1];
        let current_rsi = latest(&rsi_series).unwrap_or(50.0);

        let metrics = AssetMetrics {
            current_price,
            daily_return: latest(&returns).unwrap_or(0.0),
            total_return,
            volatility,
            max_drawdown: mdd,
            rsi: current_rsi,
            sma_20: latest(&sma_20).unwrap_or(0.0),
            sma_50: latest(&sma_50).unwrap_or(0.0),
            sma_200: latest(&sma_200).unwrap_or(0.0),
        };

        // The rules see the raw latest values: an SMA whose window has not
        // completed stays undefined here, while the metrics snapshot above
        // substitutes defaults.
        let inputs = RuleInputs {
            price: current_price,
            rsi: current_rsi,
            sma_50: latest(&sma_50),
            sma_200: latest(&sma_200),
        };
        let signals = evaluate_rules(&inputs);
        let total_delta: i32 = signals.iter().map(|s| s.delta).sum();
        let recommendation = decide(total_delta);
        let reasoning: Vec<String> = signals.into_iter().map(|s| s.reason).collect();

        let score = composite_score(&metrics, &RiskWeights::get(profile));
        debug!(ticker, score, %recommendation, "analysis complete");

        AnalysisResult {
            ticker: ticker.to_string(),
            metrics,
            score,
            recommendation,
            reasoning,
            risk_profile: profile,
        }
    }

    fn insufficient_data(ticker: &str, profile: RiskProfile) -> AnalysisResult {
        AnalysisResult {
            ticker: ticker.to_string(),
            metrics: AssetMetrics::default(),
            score: 0.0,
            recommendation: Recommendation::NotAvailable,
            reasoning: vec!["Insufficient Data".to_string()],
            risk_profile: profile,
        }
    }
}
