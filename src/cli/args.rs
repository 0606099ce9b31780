//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Hypnos - Explore, visualize and model sleep-health survey data
#[derive(Parser, Debug)]
#[command(name = "hypnos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file with the sleep survey responses
    #[arg(short, long, default_value = "sleep_health_data.csv")]
    pub input: PathBuf,

    /// Directory where chart PNGs are written
    #[arg(long, default_value = "charts")]
    pub charts_dir: PathBuf,

    /// Skip chart rendering entirely
    #[arg(long, default_value = "false")]
    pub no_charts: bool,

    /// Number of rows shown in the dataset preview
    #[arg(long, default_value = "5", value_parser = validate_head_rows)]
    pub head_rows: usize,

    /// Number of rows to use for schema inference.
    /// Higher values improve type detection for ambiguous columns but may be slower.
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

/// Validator for head_rows parameter
fn validate_head_rows(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value == 0 {
        Err("head_rows must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
