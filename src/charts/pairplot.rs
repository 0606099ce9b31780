//! Pairwise scatter grid over the numeric survey columns.

use anyhow::Result;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

use super::kde::density_curve;
use super::{padded_range, SERIES_COLORS};
use crate::pipeline::schema::PAIRPLOT_COLUMNS;
use crate::pipeline::stats::numeric_values;

/// Grid of scatter panels for every numeric column pair, with a density
/// curve on the diagonal.
pub fn numeric_pairplot(df: &DataFrame, path: &Path) -> Result<()> {
    let n = PAIRPLOT_COLUMNS.len();
    let mut data: Vec<Vec<f64>> = Vec::with_capacity(n);
    for name in PAIRPLOT_COLUMNS {
        data.push(numeric_values(df, name)?);
    }
    if data.iter().any(|column| column.is_empty()) {
        anyhow::bail!("no rows to plot");
    }
    let ranges: Vec<(f64, f64)> = data.iter().map(|column| padded_range(column)).collect();

    let root = BitMapBackend::new(path, (1500, 1500)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((n, n));

    for (idx, panel) in panels.iter().enumerate() {
        let row = idx / n;
        let col = idx % n;
        let x_name = PAIRPLOT_COLUMNS[col];
        let y_name = PAIRPLOT_COLUMNS[row];
        let (x_lo, x_hi) = ranges[col];

        if row == col {
            let curve = density_curve(&data[col], 150);
            let peak = curve.iter().map(|&(_, y)| y).fold(0.0, f64::max);
            let y_top = if peak > 0.0 { peak * 1.1 } else { 1.0 };

            let mut chart = ChartBuilder::on(panel)
                .margin(5)
                .x_label_area_size(25)
                .y_label_area_size(30)
                .build_cartesian_2d(x_lo..x_hi, 0f64..y_top)?;

            let mut mesh = chart.configure_mesh();
            mesh.x_labels(4).y_labels(4).label_style(("sans-serif", 10));
            if row == n - 1 {
                mesh.x_desc(x_name);
            }
            if col == 0 {
                mesh.y_desc(y_name);
            }
            mesh.draw()?;

            chart.draw_series(LineSeries::new(curve, &SERIES_COLORS[0]))?;
        } else {
            let (y_lo, y_hi) = ranges[row];

            let mut chart = ChartBuilder::on(panel)
                .margin(5)
                .x_label_area_size(25)
                .y_label_area_size(30)
                .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

            let mut mesh = chart.configure_mesh();
            mesh.x_labels(4).y_labels(4).label_style(("sans-serif", 10));
            if row == n - 1 {
                mesh.x_desc(x_name);
            }
            if col == 0 {
                mesh.y_desc(y_name);
            }
            mesh.draw()?;

            chart.draw_series(
                data[col]
                    .iter()
                    .zip(&data[row])
                    .map(|(&x, &y)| Circle::new((x, y), 2, SERIES_COLORS[0].mix(0.7).filled())),
            )?;
        }
    }

    root.present()?;
    Ok(())
}
