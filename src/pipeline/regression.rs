//! Ordinary least squares regression.

use faer::prelude::*;
use faer::Mat;
use polars::prelude::*;

use super::error::AnalysisError;
use super::stats::numeric_values;

/// Fitted linear model: one coefficient per predictor plus an intercept.
#[derive(Debug, Clone)]
pub struct LinearFit {
    /// Predictor column names, in fit order
    pub predictors: Vec<String>,
    /// Coefficient for each predictor, order-matched to `predictors`
    pub coefficients: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
}

impl LinearFit {
    /// Predictor names paired with their coefficients.
    pub fn terms(&self) -> impl Iterator<Item = (&str, f64)> {
        self.predictors
            .iter()
            .map(|n| n.as_str())
            .zip(self.coefficients.iter().copied())
    }
}

/// Fit `target ~ predictors` by least squares with an intercept.
///
/// The design matrix is `[1 | X]` and the solve goes through a QR
/// decomposition, so collinear predictors still yield a least-squares
/// solution. The fit is rejected when the table cannot determine the
/// unknowns (fewer rows than coefficients) or the solution degenerates.
pub fn fit_ols(
    df: &DataFrame,
    predictors: &[&str],
    target: &str,
) -> Result<LinearFit, AnalysisError> {
    let y_values = numeric_values(df, target)?;
    let n = y_values.len();
    let k = predictors.len();

    let mut x_cols: Vec<Vec<f64>> = Vec::with_capacity(k);
    for &name in predictors {
        let values = numeric_values(df, name)?;
        if values.len() != n {
            return Err(AnalysisError::numeric(
                "OLS fit",
                format!("column '{}' has a different length than '{}'", name, target),
            ));
        }
        x_cols.push(values);
    }

    if n == 0 {
        return Err(AnalysisError::degenerate("OLS fit", "table has no rows"));
    }
    if n < k + 1 {
        return Err(AnalysisError::degenerate(
            "OLS fit",
            format!("{} rows cannot determine {} unknowns", n, k + 1),
        ));
    }

    let x = Mat::from_fn(n, k + 1, |i, j| if j == 0 { 1.0 } else { x_cols[j - 1][i] });
    let y = Mat::from_fn(n, 1, |i, _| y_values[i]);

    let solution = x.qr().solve_lstsq(&y);

    let intercept = solution[(0, 0)];
    let coefficients: Vec<f64> = (0..k).map(|j| solution[(j + 1, 0)]).collect();

    if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
        return Err(AnalysisError::numeric(
            "OLS fit",
            "solution contains non-finite values",
        ));
    }

    Ok(LinearFit {
        predictors: predictors.iter().map(|s| s.to_string()).collect(),
        coefficients,
        intercept,
    })
}
