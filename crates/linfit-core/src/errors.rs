use thiserror::Error;

/// Errors that can occur while loading a dataset or fitting the line
#[derive(Error, Debug)]
pub enum RegressionError {
    // Resource errors
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    // Schema errors
    #[error("Column {name:?} not found (available columns: {available:?})")]
    MissingColumn { name: String, available: Vec<String> },

    #[error("Row {row}, column {column:?}: {value:?} is not a finite number")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    // Input validation errors
    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Dimension mismatch: x has {x_len} values, y has {y_len}")]
    DimensionMismatch { x_len: usize, y_len: usize },

    // Degenerate input errors
    #[error("Insufficient data: {rows} rows (need at least 2)")]
    InsufficientData { rows: usize },

    #[error("Predictor has zero variance: all x values are identical")]
    ZeroVariance,
}

/// Result type for regression operations
pub type RegressionResult<T> = Result<T, RegressionError>;
