//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod price;

pub use analysis::{AnalysisResult, AssetMetrics, Recommendation, RiskProfile, Watchlist};
pub use price::{Period, PriceBar, PriceSeries};
