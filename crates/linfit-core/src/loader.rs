//! CSV loader for two-column regression datasets

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::dataset::Dataset;
use crate::errors::{RegressionError, RegressionResult};

/// Options controlling how a CSV resource is read
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Header name of the predictor column
    pub x_column: String,
    /// Header name of the response column
    pub y_column: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            x_column: "X".to_string(),
            y_column: "Y".to_string(),
            delimiter: b',',
        }
    }
}

/// Load a dataset from a CSV file on disk.
///
/// The file handle is scoped to this call and released once the rows are
/// in memory.
///
/// # Errors
/// Propagates I/O failures, malformed CSV, missing columns, non-numeric
/// cells, and datasets with fewer than two rows. Failure is fatal to the
/// run; nothing is retried.
pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> RegressionResult<Dataset> {
    let path = path.as_ref();
    debug!("loading dataset from {}", path.display());

    let file = File::open(path)?;
    read_csv(file, options)
}

/// Read a dataset from any CSV source.
///
/// The header row is required. Columns are located by exact header name;
/// their order and any extra columns are irrelevant.
pub fn read_csv<R: Read>(reader: R, options: &LoadOptions) -> RegressionResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let x_idx = find_column(&headers, &options.x_column)?;
    let y_idx = find_column(&headers, &options.y_column)?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Rows are numbered from 1, not counting the header.
        let row = i + 1;
        xs.push(parse_cell(
            record.get(x_idx).unwrap_or(""),
            &options.x_column,
            row,
        )?);
        ys.push(parse_cell(
            record.get(y_idx).unwrap_or(""),
            &options.y_column,
            row,
        )?);
    }

    debug!("loaded {} rows", xs.len());
    Dataset::new(xs, ys)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> RegressionResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| RegressionError::MissingColumn {
            name: name.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })
}

fn parse_cell(raw: &str, column: &str, row: usize) -> RegressionResult<f64> {
    let invalid = || RegressionError::InvalidValue {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}
