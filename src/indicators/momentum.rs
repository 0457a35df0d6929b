//! RSI (Relative Strength Index) indicator

/// Calculate an RSI series over close prices.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses are simple rolling means over the trailing `period`
/// deltas (no exponential smoothing), so the first `period` points are
/// undefined. A window with zero average loss pins the value to 100
/// instead of dividing by zero.
pub fn rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for window in closes.windows(2) {
        let change = window[1] - window[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    for i in period..closes.len() {
        // deltas feeding point i span series indices (i - period, i]
        let start = i - period;
        let avg_gain: f64 = gains[start..i].iter().sum::<f64>() / period as f64;
        let avg_loss: f64 = losses[start..i].iter().sum::<f64>() / period as f64;

        let value = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };
        out[i] = Some(value);
    }

    out
}

/// RSI with the conventional 14-bar period.
pub fn rsi_default(closes: &[f64]) -> Vec<Option<f64>> {
    rsi(closes, 14)
}
