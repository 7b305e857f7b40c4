//! linfit: fit a least-squares line to two columns of a CSV file

mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use linfit_core::loader::{load_csv, LoadOptions};
use linfit_core::ols::coefficients;
use linfit_core::stats::describe;

#[derive(Parser, Debug)]
#[command(name = "linfit", version, about = "Simple linear regression over CSV data")]
struct Cli {
    /// Path to the input CSV file
    input: PathBuf,

    /// Header name of the predictor column
    #[arg(long, default_value = "X")]
    x_column: String,

    /// Header name of the response column
    #[arg(long, default_value = "Y")]
    y_column: String,

    /// Field delimiter (single ASCII character)
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Print per-variable summary statistics before the coefficients
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }

    let options = LoadOptions {
        x_column: cli.x_column,
        y_column: cli.y_column,
        delimiter: cli.delimiter as u8,
    };

    let dataset = load_csv(&cli.input, &options)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    info!("loaded {} rows from {}", dataset.n_rows(), cli.input.display());

    if cli.stats {
        let summary = describe(&dataset).context("failed to summarize dataset")?;
        print!("{}", report::render_summary(&summary));
    }

    let coef = coefficients(&dataset).context("failed to estimate coefficients")?;
    println!("{}", report::render_coefficients(&coef));

    Ok(())
}
