//! Ranking and flat-file export of analysis results.

use crate::models::analysis::AnalysisResult;
use std::cmp::Ordering;
use std::fmt::Write;

/// Sort results by descending score; ties break on ticker for stable
/// output.
pub fn rank(mut results: Vec<AnalysisResult>) -> Vec<AnalysisResult> {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.ticker.cmp(&b.ticker))
    });
    results
}

/// Flat CSV report: one row per result, ranked order preserved.
pub fn to_csv(results: &[AnalysisResult]) -> String {
    let mut out = String::from("ticker,score,recommendation,price,total_return,volatility,rsi\n");
    for r in results {
        let _ = writeln!(
            out,
            "{},{:.2},{},{:.2},{:.4},{:.4},{:.1}",
            r.ticker,
            r.score,
            r.recommendation,
            r.metrics.current_price,
            r.metrics.total_return,
            r.metrics.volatility,
            r.metrics.rsi
        );
    }
    out
}
