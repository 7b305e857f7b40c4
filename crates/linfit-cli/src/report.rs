//! Report formatting for fitted results

use linfit_core::{Coefficients, DatasetSummary};

/// Render the coefficient line. Values are fixed at three decimals.
pub fn render_coefficients(coef: &Coefficients) -> String {
    format!(
        "Coefficients: B0={:.3}, B1={:.3}",
        coef.intercept, coef.slope
    )
}

/// Render the per-variable summary block, one statistic per line.
pub fn render_summary(summary: &DatasetSummary) -> String {
    format!(
        "x stats: mean={:.3} variance={:.3}\ny stats: mean={:.3} variance={:.3}\nCovariance: {:.3}\n",
        summary.x.mean,
        summary.x.variance,
        summary.y.mean,
        summary.y.variance,
        summary.covariance
    )
}
