use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of indicator and risk/return values at the latest bar.
///
/// Values whose trailing window has not completed are substituted at
/// snapshot time: 0.0 for moving averages and returns, 50.0 for RSI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetMetrics {
    pub current_price: f64,
    pub daily_return: f64,
    pub total_return: f64,
    pub volatility: f64,
    pub max_drawdown: f64,
    pub rsi: f64,
    pub sma_20: f64,
    pub sma_50: f64,
    pub sma_200: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Sell => "Sell",
            Recommendation::NotAvailable => "N/A",
        };
        f.write_str(label)
    }
}

/// Named weighting scheme biasing the composite score toward trend,
/// momentum, or capital preservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    /// Resolve a profile by name. Unknown names fall back to Moderate.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Conservative" => RiskProfile::Conservative,
            "Aggressive" => RiskProfile::Aggressive,
            _ => RiskProfile::Moderate,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

impl Default for RiskProfile {
    fn default() -> Self {
        RiskProfile::Moderate
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-ticker output of the signal engine, consumed read-only by the
/// ranking/report layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ticker: String,
    pub metrics: AssetMetrics,
    /// Composite score in [0, 100].
    pub score: f64,
    pub recommendation: Recommendation,
    /// Human-readable signal reasons, in rule evaluation order.
    pub reasoning: Vec<String>,
    pub risk_profile: RiskProfile,
}

/// Named group of tickers analyzed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    pub name: String,
    pub tickers: Vec<String>,
}
