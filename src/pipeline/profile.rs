//! Dataset profiling: column structure, missing values, summary statistics.

use polars::prelude::*;

use super::error::AnalysisError;

/// Structure of a single column: type and null counts.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
    pub missing: usize,
}

/// Summary statistics for one numeric column.
///
/// Mirrors the classic describe table: count, mean, sample standard
/// deviation (ddof = 1), min, the three quartiles, max. Statistics that are
/// undefined for the column's size come out as NaN (mean of zero values,
/// std of a single value).
#[derive(Debug, Clone)]
pub struct DescribeRow {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Profile every column of the dataset.
pub fn column_profiles(df: &DataFrame) -> Vec<ColumnProfile> {
    df.get_columns()
        .iter()
        .map(|column| {
            let missing = column.null_count();
            ColumnProfile {
                name: column.name().to_string(),
                dtype: column.dtype().to_string(),
                non_null: column.len() - missing,
                missing,
            }
        })
        .collect()
}

/// Total number of missing cells across all columns.
pub fn total_missing(profiles: &[ColumnProfile]) -> usize {
    profiles.iter().map(|p| p.missing).sum()
}

/// Summary statistics for every numeric column, in column order.
pub fn describe_numeric(df: &DataFrame) -> Result<Vec<DescribeRow>, AnalysisError> {
    let mut rows = Vec::new();

    for column in df.get_columns() {
        if !column.dtype().is_primitive_numeric() {
            continue;
        }

        let float = column.cast(&DataType::Float64)?;
        let mut values: Vec<f64> = float.f64()?.into_iter().flatten().collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        rows.push(describe_values(column.name().as_str(), &values));
    }

    Ok(rows)
}

/// Describe one column from its sorted values.
fn describe_values(name: &str, sorted: &[f64]) -> DescribeRow {
    let count = sorted.len();

    let mean = if count > 0 {
        sorted.iter().sum::<f64>() / count as f64
    } else {
        f64::NAN
    };

    let std = if count > 1 {
        let sum_sq_dev: f64 = sorted.iter().map(|v| (v - mean) * (v - mean)).sum();
        (sum_sq_dev / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    DescribeRow {
        column: name.to_string(),
        count,
        mean,
        std,
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q25: quantile_sorted(sorted, 0.25),
        median: quantile_sorted(sorted, 0.5),
        q75: quantile_sorted(sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

/// Quantile of pre-sorted values with linear interpolation between ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}
