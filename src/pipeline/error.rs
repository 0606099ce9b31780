//! Error types for the analysis pipeline.
//!
//! This module defines the `AnalysisError` enum covering the failure modes of
//! loading, cleaning, and analyzing a survey dataset. Each variant carries
//! enough context to tell the user which file, column, or statistic failed.

use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, cleaning, or analyzing a dataset.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input file is missing or unreadable.
    #[error("Cannot access input file '{path}': {source}")]
    FileAccess {
        /// Path that failed the accessibility check
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents could not be parsed into a table.
    #[error("Failed to parse '{path}': {source}")]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// A column the analysis depends on is absent from the dataset.
    #[error("Required column '{column}' not found in dataset")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// A column could not be brought to its declared type.
    #[error("Column '{column}' cannot be read as {expected}")]
    ColumnType {
        /// Name of the offending column
        column: String,
        /// Human-readable name of the declared type
        expected: &'static str,
    },

    /// A statistic is undefined for the given data.
    ///
    /// Raised for empty or singleton groups, zero-variance inputs, and
    /// underdetermined regression fits. The caller gets a typed error
    /// instead of a NaN result.
    #[error("{what} is undefined: {detail}")]
    DegenerateStatistic {
        /// Which statistic failed (e.g. "Pearson correlation")
        what: String,
        /// Why the data does not support it
        detail: String,
    },

    /// Numerical computation produced an unusable result.
    #[error("Numeric failure in {context}: {detail}")]
    Numeric {
        /// Computation that failed (e.g. "OLS fit")
        context: String,
        /// Detailed failure message
        detail: String,
    },

    /// Internal table operation failed.
    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] PolarsError),
}

impl AnalysisError {
    /// Shorthand for a `DegenerateStatistic` error.
    pub fn degenerate(what: impl Into<String>, detail: impl Into<String>) -> Self {
        AnalysisError::DegenerateStatistic {
            what: what.into(),
            detail: detail.into(),
        }
    }

    /// Shorthand for a `Numeric` error.
    pub fn numeric(context: impl Into<String>, detail: impl Into<String>) -> Self {
        AnalysisError::Numeric {
            context: context.into(),
            detail: detail.into(),
        }
    }

    /// Shorthand for a `MissingColumn` error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        AnalysisError::MissingColumn {
            column: column.into(),
        }
    }
}
