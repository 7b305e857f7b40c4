//! linfit-core: simple linear regression over two-column datasets
//!
//! This crate loads a two-column numeric table (predictor X, response Y)
//! and estimates the coefficients of the line `y = b0 + b1 * x` by
//! ordinary least squares. The estimator works on unnormalized second
//! moments, so the variance and covariance it consumes must come from the
//! same accumulation scheme; [`stats`] provides exactly that pairing.

pub mod dataset;
pub mod errors;
pub mod loader;
pub mod ols;
pub mod stats;
pub mod types;

pub use dataset::Dataset;
pub use errors::{RegressionError, RegressionResult};
pub use types::*;
