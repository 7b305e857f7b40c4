//! Ordinary least squares estimator for a single predictor
//!
//! Estimates the coefficients of y = b0 + b1 * x:
//!
//! b1 = Σ(x_i - mean_x)(y_i - mean_y) / Σ(x_i - mean_x)²
//! b0 = mean_y - b1 * mean_x
//!
//! Both sums are unnormalized; the shared 1/n factor cancels in the ratio.

use crate::dataset::Dataset;
use crate::errors::{RegressionError, RegressionResult};
use crate::stats::{covariance, mean, variance};
use crate::types::Coefficients;

/// Estimate the intercept and slope for a dataset.
///
/// # Arguments
/// * `data` - Paired observations of the predictor and the response
///
/// # Returns
/// * `Coefficients` holding the intercept (b0) and slope (b1)
///
/// # Errors
/// Returns `ZeroVariance` when every x value is identical: the slope would
/// be a division by zero, which must be reported rather than propagated as
/// infinity. The test is exact (== 0.0); only bit-identical x values sum
/// to exactly zero.
pub fn coefficients(data: &Dataset) -> RegressionResult<Coefficients> {
    let mean_x = mean(data.xs())?;
    let mean_y = mean(data.ys())?;

    let var_x = variance(data.xs(), mean_x);
    if var_x == 0.0 {
        return Err(RegressionError::ZeroVariance);
    }

    let covar = covariance(data.xs(), mean_x, data.ys(), mean_y)?;
    let slope = covar / var_x;
    let intercept = mean_y - slope * mean_x;

    Ok(Coefficients { intercept, slope })
}
