//! Simple moving average indicator

/// Calculate an SMA series over close prices.
///
/// Trailing arithmetic mean over `window` bars; the first `window - 1`
/// points are undefined.
pub fn sma(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if window == 0 || closes.len() < window {
        return out;
    }

    let mut sum: f64 = closes[..window].iter().sum();
    out[window - 1] = Some(sum / window as f64);
    for i in window..closes.len() {
        sum += closes[i] - closes[i - window];
        out[i] = Some(sum / window as f64);
    }

    out
}
