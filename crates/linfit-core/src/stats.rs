//! Summary statistics over numeric sequences
//!
//! Variance and covariance are deliberately UNNORMALIZED: plain sums of
//! deviation products, not divided by N or N-1. The estimator takes the
//! ratio of the two, so the shared 1/N factor cancels; normalizing one
//! without the other would change the fitted slope.

use crate::dataset::Dataset;
use crate::errors::{RegressionError, RegressionResult};
use crate::types::{DatasetSummary, VariableSummary};

/// Compute the arithmetic mean of a sequence.
///
/// mean = Σ x_i / N
///
/// # Errors
/// Returns `EmptyInput` for an empty sequence; there is no silent NaN.
pub fn mean(values: &[f64]) -> RegressionResult<f64> {
    if values.is_empty() {
        return Err(RegressionError::EmptyInput { field: "values" });
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Compute the sum of squared deviations from `mean`.
///
/// variance = Σ (x_i - mean)²
///
/// The sum is not normalized. The empty sum is 0.0.
pub fn variance(values: &[f64], mean: f64) -> f64 {
    values
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum()
}

/// Compute the sum of pairwise cross-deviations, paired index-wise.
///
/// covariance = Σ (x_i - mean_x) * (y_i - mean_y)
///
/// The sum is not normalized. The value is symmetric under swapping the
/// (x, mean_x) and (y, mean_y) argument pairs.
///
/// # Errors
/// Returns `DimensionMismatch` when the sequences differ in length.
pub fn covariance(xs: &[f64], mean_x: f64, ys: &[f64], mean_y: f64) -> RegressionResult<f64> {
    if xs.len() != ys.len() {
        return Err(RegressionError::DimensionMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    let mut covar = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        covar += (x - mean_x) * (y - mean_y);
    }
    Ok(covar)
}

/// Summarize both columns of a dataset: per-variable mean and variance,
/// plus the covariance between them.
pub fn describe(data: &Dataset) -> RegressionResult<DatasetSummary> {
    let mean_x = mean(data.xs())?;
    let mean_y = mean(data.ys())?;

    Ok(DatasetSummary {
        x: VariableSummary {
            mean: mean_x,
            variance: variance(data.xs(), mean_x),
        },
        y: VariableSummary {
            mean: mean_y,
            variance: variance(data.ys(), mean_y),
        },
        covariance: covariance(data.xs(), mean_x, data.ys(), mean_y)?,
        n_observations: data.n_rows(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_mean_empty() {
        assert!(matches!(
            mean(&[]),
            Err(RegressionError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_variance_constant_sequence() {
        assert_eq!(variance(&[1.0, 1.0, 1.0], 1.0), 0.0);
    }

    #[test]
    fn test_variance_is_unnormalized() {
        // Deviations -2,-1,0,1,2: squared sum is 10, not 10/5
        assert_relative_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0], 3.0), 10.0);
    }

    #[test]
    fn test_covariance_is_unnormalized() {
        // Per-pair products 8,2,0,2,8 sum to 20
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert_relative_eq!(covariance(&xs, 3.0, &ys, 6.0).unwrap(), 20.0);
    }

    #[test]
    fn test_covariance_symmetric_in_value() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [2.0, 4.0, 6.0];
        let xy = covariance(&xs, 2.0, &ys, 4.0).unwrap();
        let yx = covariance(&ys, 4.0, &xs, 2.0).unwrap();
        assert_eq!(xy, yx);
    }

    #[test]
    fn test_covariance_dimension_mismatch() {
        let result = covariance(&[1.0, 2.0], 1.5, &[1.0], 1.0);
        assert!(matches!(
            result,
            Err(RegressionError::DimensionMismatch {
                x_len: 2,
                y_len: 1
            })
        ));
    }

    #[test]
    fn test_describe() {
        let data = Dataset::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![2.0, 4.0, 6.0, 8.0, 10.0],
        )
        .unwrap();
        let summary = describe(&data).unwrap();

        assert_relative_eq!(summary.x.mean, 3.0);
        assert_relative_eq!(summary.x.variance, 10.0);
        assert_relative_eq!(summary.y.mean, 6.0);
        assert_relative_eq!(summary.y.variance, 40.0);
        assert_relative_eq!(summary.covariance, 20.0);
        assert_eq!(summary.n_observations, 5);
    }
}
