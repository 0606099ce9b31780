//! Chart rendering to PNG files.
//!
//! Six charts are produced per run, numbered in analysis order. Each render
//! opens a bitmap backend, draws, and presents; the first failure aborts the
//! remaining charts.

pub mod boxplot;
pub mod heatmap;
pub mod histogram;
pub mod kde;
pub mod occupation;
pub mod pairplot;
pub mod scatter;

pub use boxplot::quality_by_gender_boxplot;
pub use heatmap::correlation_heatmap;
pub use histogram::sleep_quality_histogram;
pub use occupation::quality_by_occupation_bars;
pub use pairplot::numeric_pairplot;
pub use scatter::activity_vs_quality_scatter;

use anyhow::{Context, Result};
use plotters::style::RGBColor;
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};

use crate::pipeline::EncodingMap;

/// Series palette shared by the categorical charts.
pub(crate) const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Palette color for the i-th series, cycling past the palette end.
pub(crate) fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Axis label for a group code: the original label when the column was
/// encoded, the code digits otherwise.
pub(crate) fn code_label(encodings: &EncodingMap, column: &str, code: i64) -> String {
    encodings
        .get(column)
        .and_then(|e| u32::try_from(code).ok().and_then(|c| e.label_of(c)))
        .map(|l| l.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Value range padded by 5% so points do not sit on the plot frame.
pub(crate) fn padded_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    if span == 0.0 {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = span * 0.05;
    (lo - pad, hi + pad)
}

/// Render all six charts into `dir`, returning the written paths in order.
pub fn render_all(df: &DataFrame, encodings: &EncodingMap, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create chart directory {}", dir.display()))?;

    let mut rendered = Vec::with_capacity(6);

    let path = dir.join("01_sleep_quality_distribution.png");
    sleep_quality_histogram(df, &path).context("Sleep quality histogram failed")?;
    rendered.push(path);

    let path = dir.join("02_sleep_quality_by_gender.png");
    quality_by_gender_boxplot(df, encodings, &path).context("Gender box plot failed")?;
    rendered.push(path);

    let path = dir.join("03_numeric_pairplot.png");
    numeric_pairplot(df, &path).context("Pairwise relationship grid failed")?;
    rendered.push(path);

    let path = dir.join("04_sleep_quality_by_occupation.png");
    quality_by_occupation_bars(df, encodings, &path).context("Occupation bar chart failed")?;
    rendered.push(path);

    let path = dir.join("05_activity_vs_sleep_quality.png");
    activity_vs_quality_scatter(df, encodings, &path).context("Activity scatter plot failed")?;
    rendered.push(path);

    let path = dir.join("06_correlation_heatmap.png");
    correlation_heatmap(df, &path).context("Correlation heatmap failed")?;
    rendered.push(path);

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::encode_categorical;
    use polars::prelude::*;

    #[test]
    fn test_code_label_decodes_encoded_columns() {
        let mut df = df! {
            "Gender" => ["Male", "Female", "Male"],
        }
        .unwrap();
        let encodings = encode_categorical(&mut df, &["Gender"]).unwrap();

        assert_eq!(code_label(&encodings, "Gender", 0), "Female");
        assert_eq!(code_label(&encodings, "Gender", 1), "Male");
        // Codes outside the label set and unencoded columns fall back to digits
        assert_eq!(code_label(&encodings, "Gender", 7), "7");
        assert_eq!(code_label(&encodings, "Occupation", 2), "2");
    }

    #[test]
    fn test_padded_range_adds_headroom() {
        let (lo, hi) = padded_range(&[10.0, 20.0]);
        assert!(lo < 10.0 && hi > 20.0);

        let (lo, hi) = padded_range(&[5.0, 5.0]);
        assert_eq!((lo, hi), (4.5, 5.5));
    }

    #[test]
    fn test_series_colors_cycle() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
    }
}
