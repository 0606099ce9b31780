//! Significance statistics: Pearson correlation, two-sample t-test,
//! one-way ANOVA, and the full correlation matrix.
//!
//! All statistics are computed from materialized `f64` values using
//! single-pass or two-pass moment algorithms; p-values come from the
//! Student-t and Fisher-Snedecor distributions. Inputs that leave a
//! statistic undefined (constant columns, singleton groups) are rejected
//! with `DegenerateStatistic` instead of producing NaN.

use faer::Mat;
use polars::prelude::*;
use rayon::prelude::*;
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};
use std::collections::BTreeMap;

use super::error::AnalysisError;

/// Result of a two-sample t-test.
#[derive(Debug, Clone, Copy)]
pub struct TTestResult {
    /// t statistic
    pub t: f64,
    /// Two-sided p-value
    pub p: f64,
}

/// Result of a one-way ANOVA.
#[derive(Debug, Clone, Copy)]
pub struct AnovaResult {
    /// F statistic
    pub f: f64,
    /// Right-tail p-value
    pub p: f64,
}

/// Pearson correlation coefficient between two equal-length samples.
///
/// Uses a single-pass Welford update for numerical stability. Either sample
/// having zero variance makes the coefficient undefined.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<f64, AnalysisError> {
    if xs.len() != ys.len() {
        return Err(AnalysisError::degenerate(
            "Pearson correlation",
            format!("sample lengths differ ({} vs {})", xs.len(), ys.len()),
        ));
    }
    if xs.len() < 2 {
        return Err(AnalysisError::degenerate(
            "Pearson correlation",
            "needs at least two paired observations",
        ));
    }

    let mut count = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        count += 1.0;
        let dx = x - mean_x;
        let dy = y - mean_y;
        mean_x += dx / count;
        mean_y += dy / count;
        var_x += dx * (x - mean_x);
        var_y += dy * (y - mean_y);
        cov_xy += dx * (y - mean_y);
    }

    let std_x = (var_x / count).sqrt();
    let std_y = (var_y / count).sqrt();

    if std_x == 0.0 || std_y == 0.0 {
        return Err(AnalysisError::degenerate(
            "Pearson correlation",
            "one of the samples has zero variance",
        ));
    }

    Ok(cov_xy / (count * std_x * std_y))
}

/// Pearson correlation between two numeric columns of a DataFrame.
pub fn pearson_columns(df: &DataFrame, a: &str, b: &str) -> Result<f64, AnalysisError> {
    let xs = numeric_values(df, a)?;
    let ys = numeric_values(df, b)?;
    pearson(&xs, &ys)
}

/// Independent two-sample t-test with pooled variance.
///
/// Assumes equal population variances; the degrees of freedom are
/// `n1 + n2 - 2` and the p-value is two-sided. Both groups need at least
/// two observations and a positive pooled variance.
pub fn t_test_ind(a: &[f64], b: &[f64]) -> Result<TTestResult, AnalysisError> {
    let n1 = a.len();
    let n2 = b.len();
    if n1 < 2 || n2 < 2 {
        return Err(AnalysisError::degenerate(
            "Two-sample t-test",
            "each group needs at least two observations",
        ));
    }

    let mean1 = mean(a);
    let mean2 = mean(b);
    let var1 = sample_variance(a, mean1);
    let var2 = sample_variance(b, mean2);

    let dof = (n1 + n2 - 2) as f64;
    let pooled = ((n1 - 1) as f64 * var1 + (n2 - 1) as f64 * var2) / dof;
    if pooled <= 0.0 {
        return Err(AnalysisError::degenerate(
            "Two-sample t-test",
            "pooled variance is zero (both groups are constant)",
        ));
    }

    let t = (mean1 - mean2) / (pooled * (1.0 / n1 as f64 + 1.0 / n2 as f64)).sqrt();

    let dist = StudentsT::new(0.0, 1.0, dof).map_err(|e| {
        AnalysisError::numeric("Two-sample t-test", format!("t distribution: {}", e))
    })?;
    let p = (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0);

    Ok(TTestResult { t, p })
}

/// One-way ANOVA over two or more groups.
///
/// F is the ratio of between-group to within-group mean squares; the
/// p-value is the right tail of the F distribution with `k - 1` and
/// `n - k` degrees of freedom.
pub fn anova_one_way(groups: &[Vec<f64>]) -> Result<AnovaResult, AnalysisError> {
    let k = groups.len();
    if k < 2 {
        return Err(AnalysisError::degenerate(
            "One-way ANOVA",
            "needs at least two groups",
        ));
    }
    if let Some(idx) = groups.iter().position(|g| g.is_empty()) {
        return Err(AnalysisError::degenerate(
            "One-way ANOVA",
            format!("group {} is empty", idx),
        ));
    }

    let n: usize = groups.iter().map(|g| g.len()).sum();
    let grand_mean = groups.iter().flatten().sum::<f64>() / n as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let group_mean = mean(group);
        let dev = group_mean - grand_mean;
        ss_between += group.len() as f64 * dev * dev;
        ss_within += group
            .iter()
            .map(|v| (v - group_mean) * (v - group_mean))
            .sum::<f64>();
    }

    let df1 = (k - 1) as f64;
    let df2 = (n - k) as f64;
    if df2 < 1.0 {
        return Err(AnalysisError::degenerate(
            "One-way ANOVA",
            "not enough observations for the residual degrees of freedom",
        ));
    }
    if ss_within <= 0.0 {
        return Err(AnalysisError::degenerate(
            "One-way ANOVA",
            "within-group variance is zero (every group is constant)",
        ));
    }

    let f = (ss_between / df1) / (ss_within / df2);

    let dist = FisherSnedecor::new(df1, df2)
        .map_err(|e| AnalysisError::numeric("One-way ANOVA", format!("F distribution: {}", e)))?;
    let p = (1.0 - dist.cdf(f)).clamp(0.0, 1.0);

    Ok(AnovaResult { f, p })
}

/// Values of `value_column` split by the integer codes of `group_column`,
/// ascending by code.
pub fn group_values(
    df: &DataFrame,
    group_column: &str,
    value_column: &str,
) -> Result<Vec<(i64, Vec<f64>)>, AnalysisError> {
    let codes = integer_codes(df, group_column)?;
    let values = numeric_values(df, value_column)?;

    let mut buckets: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for (code, value) in codes.into_iter().zip(values.into_iter()) {
        buckets.entry(code).or_default().push(value);
    }

    Ok(buckets.into_iter().collect())
}

/// Values of `value_column` for group codes 0 and 1 of `group_column`.
///
/// Codes beyond 0/1 are ignored; either side being absent makes the
/// comparison undefined.
pub fn binary_groups(
    df: &DataFrame,
    group_column: &str,
    value_column: &str,
) -> Result<(Vec<f64>, Vec<f64>), AnalysisError> {
    let groups = group_values(df, group_column, value_column)?;

    let mut zeros = None;
    let mut ones = None;
    for (code, values) in groups {
        match code {
            0 => zeros = Some(values),
            1 => ones = Some(values),
            _ => {}
        }
    }

    match (zeros, ones) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(AnalysisError::degenerate(
            "Two-sample t-test",
            format!("column '{}' does not have rows for both codes 0 and 1", group_column),
        )),
    }
}

/// Pearson correlation matrix over all non-constant numeric columns.
///
/// Standardizes each column to zero mean and unit norm in parallel, then
/// forms R = Zᵀ·Z. Constant columns are excluded from the matrix; the
/// returned names identify the rows/columns that survived.
pub fn correlation_matrix(df: &DataFrame) -> Result<(Vec<String>, Mat<f64>), AnalysisError> {
    let float_columns: Vec<(String, Column)> = df
        .get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .map(|col| {
            col.cast(&DataType::Float64)
                .map(|cast| (col.name().to_string(), cast))
        })
        .collect::<PolarsResult<_>>()?;

    let n_rows = df.height();
    if n_rows == 0 {
        return Err(AnalysisError::degenerate(
            "Correlation matrix",
            "table has no rows",
        ));
    }

    // Standardize each column so that R = Z^T * Z yields Pearson coefficients
    let standardized: Vec<Option<(String, Vec<f64>)>> = float_columns
        .par_iter()
        .map(|(name, col)| {
            let ca = col.f64().ok()?;

            let mut sum = 0.0;
            let mut count = 0.0;
            for value in ca.iter().flatten() {
                sum += value;
                count += 1.0;
            }
            if count == 0.0 {
                return None;
            }
            let mean = sum / count;

            let mut sum_sq_dev = 0.0;
            for value in ca.iter().flatten() {
                let dev = value - mean;
                sum_sq_dev += dev * dev;
            }
            let std = (sum_sq_dev / count).sqrt();
            if std == 0.0 {
                return None; // Constant column - excluded
            }

            let scale = 1.0 / (std * count.sqrt());
            let z: Vec<f64> = ca
                .iter()
                .map(|value| match value {
                    Some(x) => (x - mean) * scale,
                    None => 0.0,
                })
                .collect();

            Some((name.clone(), z))
        })
        .collect();

    let valid: Vec<(String, Vec<f64>)> = standardized.into_iter().flatten().collect();
    if valid.len() < 2 {
        return Err(AnalysisError::degenerate(
            "Correlation matrix",
            "fewer than two non-constant numeric columns",
        ));
    }

    let mut z = Mat::<f64>::zeros(n_rows, valid.len());
    for (col_idx, (_, col_data)) in valid.iter().enumerate() {
        for (row_idx, &value) in col_data.iter().enumerate() {
            z[(row_idx, col_idx)] = value;
        }
    }

    let corr = z.transpose() * &z;
    let names = valid.into_iter().map(|(name, _)| name).collect();

    Ok((names, corr))
}

/// Materialize a numeric column as `f64` values, nulls skipped.
///
/// A non-numeric dtype is rejected outright; casting it would silently
/// null out every unparseable cell.
pub fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, AnalysisError> {
    let col = df
        .column(column)
        .map_err(|_| AnalysisError::missing_column(column))?;
    if !col.dtype().is_primitive_numeric() {
        return Err(AnalysisError::ColumnType {
            column: column.to_string(),
            expected: "Float64",
        });
    }
    let float = col.cast(&DataType::Float64)?;
    Ok(float.f64()?.into_iter().flatten().collect())
}

/// Materialize a group column as integer codes.
pub(crate) fn integer_codes(df: &DataFrame, column: &str) -> Result<Vec<i64>, AnalysisError> {
    let col = df
        .column(column)
        .map_err(|_| AnalysisError::missing_column(column))?;
    if !col.dtype().is_integer() {
        return Err(AnalysisError::ColumnType {
            column: column.to_string(),
            expected: "integer codes",
        });
    }
    let ints = col.cast(&DataType::Int64)?;
    Ok(ints.i64()?.into_iter().flatten().collect())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_variance(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq_dev: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    sum_sq_dev / (values.len() - 1) as f64
}
