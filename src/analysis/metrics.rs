//! Risk/return metrics over close-price sequences.

/// Trading days used to annualize daily volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Pointwise percent change `(p[i] - p[i-1]) / p[i-1]`.
///
/// The first point is undefined, as is any point whose previous close is
/// zero (the ratio stays undefined rather than becoming infinite).
pub fn daily_returns(closes: &[f64]) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    for i in 1..closes.len() {
        let prev = closes[i - 1];
        if prev != 0.0 {
            out[i] = Some((closes[i] - prev) / prev);
        }
    }
    out
}

/// Whole-series return `(last - first) / first`; 0.0 for an empty series
/// or a zero first value.
pub fn cumulative_return(closes: &[f64]) -> f64 {
    let (Some(first), Some(last)) = (closes.first(), closes.last()) else {
        return 0.0;
    };
    if *first == 0.0 {
        return 0.0;
    }
    (last - first) / first
}

/// Sample standard deviation (N-1 denominator) of the defined daily
/// returns, scaled by sqrt(252) when annualizing. Fewer than two defined
/// returns yields 0.0.
pub fn annualized_volatility(returns: &[Option<f64>], annualize: bool) -> f64 {
    let values: Vec<f64> = returns.iter().copied().flatten().collect();
    if values.len() < 2 {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    let vol = variance.sqrt();

    if annualize {
        vol * TRADING_DAYS_PER_YEAR.sqrt()
    } else {
        vol
    }
}

/// Worst peak-to-trough decline, as a negative fraction (-0.25 for a 25%
/// fall from the running maximum). Peaks of zero are skipped; an empty
/// series yields 0.0.
pub fn max_drawdown(closes: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for &price in closes {
        peak = peak.max(price);
        if peak == 0.0 {
            continue;
        }
        let drawdown = (price - peak) / peak;
        worst = worst.min(drawdown);
    }
    worst
}
