//! Column-oriented dataset for a single-predictor regression

use crate::errors::{RegressionError, RegressionResult};

/// An immutable pair of equal-length numeric columns.
///
/// Construction enforces the invariants the estimator relies on: both
/// columns have the same length, there are at least two rows, and every
/// value is finite. A single row would leave the variance at zero and the
/// slope undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Dataset {
    /// Build a dataset from a predictor column and a response column.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` for unequal lengths, `InsufficientData`
    /// for fewer than two rows, and `InvalidValue` for NaN or infinite
    /// entries.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> RegressionResult<Self> {
        if xs.len() != ys.len() {
            return Err(RegressionError::DimensionMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(RegressionError::InsufficientData { rows: xs.len() });
        }

        check_finite(&xs, "x")?;
        check_finite(&ys, "y")?;

        Ok(Self { xs, ys })
    }

    /// Predictor column.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Response column.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.xs.len()
    }
}

fn check_finite(values: &[f64], column: &str) -> RegressionResult<()> {
    for (i, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(RegressionError::InvalidValue {
                row: i + 1,
                column: column.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
