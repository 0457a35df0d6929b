//! Pure indicator functions over close-price sequences.
//!
//! Each function returns a series aligned with its input, with `None`
//! marking points whose trailing window has not completed.

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use momentum::{rsi, rsi_default};
pub use trend::sma;
pub use volatility::{bollinger_bands, bollinger_bands_default, BollingerBands};

/// Latest value of an indicator series, if its window has completed.
pub fn latest(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}
