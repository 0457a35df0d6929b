//! Risk/return metrics derived from price history.

pub mod metrics;

pub use metrics::{annualized_volatility, cumulative_return, daily_returns, max_drawdown};
