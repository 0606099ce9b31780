//! Physical activity vs sleep quality scatter, colored by gender.

use anyhow::Result;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::collections::BTreeMap;
use std::path::Path;

use super::{code_label, padded_range, series_color};
use crate::pipeline::clean::EncodingMap;
use crate::pipeline::schema::{GENDER, PHYSICAL_ACTIVITY, QUALITY_OF_SLEEP};
use crate::pipeline::stats::{integer_codes, numeric_values};

/// Scatter of activity minutes against sleep quality with one point
/// series per gender code.
pub fn activity_vs_quality_scatter(
    df: &DataFrame,
    encodings: &EncodingMap,
    path: &Path,
) -> Result<()> {
    let codes = integer_codes(df, GENDER)?;
    let xs = numeric_values(df, PHYSICAL_ACTIVITY)?;
    let ys = numeric_values(df, QUALITY_OF_SLEEP)?;
    if xs.is_empty() || xs.len() != ys.len() || xs.len() != codes.len() {
        anyhow::bail!("no rows to plot");
    }

    let mut series: BTreeMap<i64, Vec<(f64, f64)>> = BTreeMap::new();
    for ((&code, &x), &y) in codes.iter().zip(&xs).zip(&ys) {
        series.entry(code).or_default().push((x, y));
    }

    let (x_lo, x_hi) = padded_range(&xs);
    let (y_lo, y_hi) = padded_range(&ys);

    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Physical Activity vs Sleep Quality", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Physical Activity Level")
        .y_desc("Quality of Sleep")
        .draw()?;

    for (i, (code, points)) in series.into_iter().enumerate() {
        let color = series_color(i);
        chart
            .draw_series(
                points
                    .into_iter()
                    .map(|point| Circle::new(point, 4, color.filled())),
            )?
            .label(code_label(encodings, GENDER, code))
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
