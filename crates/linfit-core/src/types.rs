/// Fitted coefficients of the line y = b0 + b1 * x
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Intercept term (b0)
    pub intercept: f64,
    /// Slope (b1)
    pub slope: f64,
}

/// Location and spread of a single variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableSummary {
    /// Arithmetic mean
    pub mean: f64,
    /// Sum of squared deviations from the mean (unnormalized)
    pub variance: f64,
}

/// Summary statistics for a loaded dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetSummary {
    /// Summary of the predictor column
    pub x: VariableSummary,
    /// Summary of the response column
    pub y: VariableSummary,
    /// Sum of pairwise cross-deviations (unnormalized)
    pub covariance: f64,
    /// Number of observations
    pub n_observations: usize,
}
