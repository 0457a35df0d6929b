//! Bollinger Bands indicator

use crate::indicators::trend::sma;

/// Band series aligned with the input closes.
///
/// Middle Band = SMA(window)
/// Upper Band = Middle + (k * standard deviation)
/// Lower Band = Middle - (k * standard deviation)
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

pub fn bollinger_bands(closes: &[f64], window: usize, k: f64) -> BollingerBands {
    let middle = sma(closes, window);
    let std = rolling_std(closes, window);

    let upper = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| Some(m.as_ref()? + k * s.as_ref()?))
        .collect();
    let lower = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| Some(m.as_ref()? - k * s.as_ref()?))
        .collect();

    BollingerBands {
        upper,
        middle,
        lower,
    }
}

/// Bollinger Bands with conventional parameters (20 SMA, 2 std devs).
pub fn bollinger_bands_default(closes: &[f64]) -> BollingerBands {
    bollinger_bands(closes, 20, 2.0)
}

/// Trailing sample standard deviation (N-1 denominator); undefined until
/// the window holds at least two points.
fn rolling_std(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if window < 2 || closes.len() < window {
        return out;
    }

    for i in (window - 1)..closes.len() {
        let slice = &closes[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let variance =
            slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (window - 1) as f64;
        out[i] = Some(variance.sqrt());
    }

    out
}
