//! Dataset loader for CSV survey files.

use polars::prelude::*;
use std::path::Path;

use super::error::AnalysisError;
use super::schema::{ColumnKind, DatasetSchema};

/// Basic size statistics for a loaded dataset.
#[derive(Debug, Clone, Copy)]
pub struct DatasetStats {
    pub rows: usize,
    pub cols: usize,
    pub memory_mb: f64,
}

/// Load a survey CSV into a DataFrame and enforce the declared schema.
///
/// Columns declared `Integer` or `Float` are strictly cast to Int64/Float64;
/// a value that cannot be represented fails the load. Categorical
/// declarations only participate in the presence check, so a file that
/// already carries integer codes in a categorical column loads unchanged.
/// Undeclared columns pass through with their inferred types.
///
/// # Arguments
/// * `path` - CSV file with a header row
/// * `schema` - Column declarations to enforce
/// * `infer_schema_length` - Rows scanned for type inference (0 = full scan)
pub fn load_dataset(
    path: &Path,
    schema: &DatasetSchema,
    infer_schema_length: usize,
) -> Result<DataFrame, AnalysisError> {
    // Distinguish unreadable paths from malformed contents up front
    std::fs::metadata(path).map_err(|source| AnalysisError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let infer = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|source| AnalysisError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    apply_schema(df, schema)
}

/// Check required columns and cast declared numeric columns to their types.
fn apply_schema(mut df: DataFrame, schema: &DatasetSchema) -> Result<DataFrame, AnalysisError> {
    let present: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();

    for spec in schema.columns() {
        if !present.iter().any(|n| n == &spec.name) {
            if spec.required {
                return Err(AnalysisError::missing_column(&spec.name));
            }
            continue;
        }

        let target_dtype = match spec.kind {
            ColumnKind::Integer => DataType::Int64,
            ColumnKind::Float => DataType::Float64,
            // Categorical columns are never coerced; files shipping integer
            // codes instead of labels stay numeric and skip encoding later.
            ColumnKind::Categorical => continue,
        };

        let column = df.column(&spec.name)?;
        if column.dtype() == &target_dtype {
            continue;
        }

        // Rechunk first: polars 0.46's cast-failure formatting panics on
        // multi-chunk series as produced by the parallel CSV reader.
        let cast = column
            .as_materialized_series()
            .rechunk()
            .strict_cast(&target_dtype)
            .map_err(|_| AnalysisError::ColumnType {
                column: spec.name.clone(),
                expected: spec.kind.describe(),
            })?;
        df.with_column(cast)?;
    }

    Ok(df)
}

/// Compute row/column counts and the estimated in-memory size.
pub fn dataset_stats(df: &DataFrame) -> DatasetStats {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    DatasetStats {
        rows,
        cols,
        memory_mb,
    }
}
