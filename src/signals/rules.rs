//! Rule-based recommendation signals.
//!
//! Each rule is an independent evaluator mapping the latest indicator
//! values to an optional `Signal`; the engine applies them in a fixed
//! order and sums the deltas into a recommendation.

use crate::models::analysis::Recommendation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    TrendCross,
    PriceVsSma200,
    Momentum,
}

/// One fired rule: its vote delta plus a human-readable reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub kind: SignalKind,
    pub delta: i32,
    pub reason: String,
}

/// Latest indicator values feeding the rules.
///
/// Moving averages stay `None` while their window is incomplete; a
/// comparison against an undefined value is false, so e.g. a missing
/// SMA 200 produces no cross signal but still reads as long-term bearish.
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs {
    pub price: f64,
    pub rsi: f64,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
}

/// Apply all rules in evaluation order.
pub fn evaluate_rules(inputs: &RuleInputs) -> Vec<Signal> {
    [
        trend_cross(inputs),
        price_vs_sma200(inputs),
        momentum(inputs),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Map a summed signal delta to a recommendation.
pub fn decide(total_delta: i32) -> Recommendation {
    if total_delta >= 2 {
        Recommendation::Buy
    } else if total_delta <= -2 {
        Recommendation::Sell
    } else {
        Recommendation::Hold
    }
}

fn trend_cross(inputs: &RuleInputs) -> Option<Signal> {
    let sma_50 = inputs.sma_50?;
    let sma_200 = inputs.sma_200?;
    if sma_50 > sma_200 {
        Some(Signal {
            kind: SignalKind::TrendCross,
            delta: 1,
            reason: "Golden Cross (Bullish Trend)".to_string(),
        })
    } else if sma_50 < sma_200 {
        Some(Signal {
            kind: SignalKind::TrendCross,
            delta: -1,
            reason: "Death Cross (Bearish Trend)".to_string(),
        })
    } else {
        None
    }
}

fn price_vs_sma200(inputs: &RuleInputs) -> Option<Signal> {
    let above = inputs
        .sma_200
        .map(|sma| inputs.price > sma)
        .unwrap_or(false);
    Some(if above {
        Signal {
            kind: SignalKind::PriceVsSma200,
            delta: 1,
            reason: "Price above SMA 200 (Long-term Bullish)".to_string(),
        }
    } else {
        Signal {
            kind: SignalKind::PriceVsSma200,
            delta: -1,
            reason: "Price below SMA 200 (Long-term Bearish)".to_string(),
        }
    })
}

fn momentum(inputs: &RuleInputs) -> Option<Signal> {
    let rsi = inputs.rsi;
    Some(if rsi < 30.0 {
        Signal {
            kind: SignalKind::Momentum,
            delta: 2,
            reason: format!("RSI Oversold ({:.1}) -> Potential Buy", rsi),
        }
    } else if rsi > 70.0 {
        Signal {
            kind: SignalKind::Momentum,
            delta: -2,
            reason: format!("RSI Overbought ({:.1}) -> Potential Sell", rsi),
        }
    } else {
        Signal {
            kind: SignalKind::Momentum,
            delta: 0,
            reason: format!("RSI Neutral ({:.1})", rsi),
        }
    })
}
