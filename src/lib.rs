//! Risk-adjusted buy/hold/sell scoring for equity tickers.
//!
//! Pipeline: cached OHLCV history (`services` + `cache`) feeds the
//! indicator and metric libraries (`indicators`, `analysis`), which the
//! signal engine (`signals`) composes into per-ticker results ranked and
//! exported by `report`.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
