//! Composite scoring weighted by risk profile.

use crate::models::analysis::{AssetMetrics, RiskProfile};

/// Fixed weight table, one entry per risk profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWeights {
    pub risk_penalty: f64,
    pub momentum_weight: f64,
    pub trend_weight: f64,
}

impl RiskWeights {
    /// Get the weights for a profile.
    pub fn get(profile: RiskProfile) -> Self {
        match profile {
            RiskProfile::Conservative => Self {
                risk_penalty: 2.0,
                momentum_weight: 0.5,
                trend_weight: 1.0,
            },
            RiskProfile::Moderate => Self {
                risk_penalty: 1.0,
                momentum_weight: 1.0,
                trend_weight: 1.0,
            },
            RiskProfile::Aggressive => Self {
                risk_penalty: 0.5,
                momentum_weight: 1.5,
                trend_weight: 1.2,
            },
        }
    }
}

/// Composite 0-100 score from the metrics snapshot.
///
/// `risk_score` and `momentum_score` both carry `momentum_weight`; the
/// observable scores depend on that pairing, so it must not be rebalanced.
pub fn composite_score(metrics: &AssetMetrics, weights: &RiskWeights) -> f64 {
    let mut trend_score = 50.0;
    if metrics.current_price > metrics.sma_200 {
        trend_score += 25.0;
    }
    if metrics.sma_50 > metrics.sma_200 {
        trend_score += 25.0;
    }

    let vol_penalty = (metrics.volatility * 100.0).min(50.0) * weights.risk_penalty;
    let mdd_penalty = (metrics.max_drawdown.abs() * 100.0).min(50.0) * weights.risk_penalty;
    let risk_score = (100.0 - vol_penalty - mdd_penalty).max(0.0);

    let momentum_score = if metrics.rsi < 30.0 {
        90.0
    } else if metrics.rsi > 70.0 {
        20.0
    } else {
        50.0 + (50.0 - metrics.rsi)
    };

    let final_score = (trend_score * weights.trend_weight
        + risk_score * weights.momentum_weight
        + momentum_score * weights.momentum_weight)
        / (weights.trend_weight + 2.0 * weights.momentum_weight);

    final_score.clamp(0.0, 100.0)
}
