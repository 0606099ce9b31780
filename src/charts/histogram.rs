//! Sleep quality histogram with a density overlay.

use anyhow::Result;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

use super::kde::density_curve;
use super::SERIES_COLORS;
use crate::pipeline::schema::QUALITY_OF_SLEEP;
use crate::pipeline::stats::numeric_values;

const BIN_COUNT: usize = 10;

/// One histogram bar: half-open value range and its row count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Histogram of the sleep quality scores with a Gaussian density curve
/// scaled to the count axis.
pub fn sleep_quality_histogram(df: &DataFrame, path: &Path) -> Result<()> {
    let values = numeric_values(df, QUALITY_OF_SLEEP)?;
    if values.is_empty() {
        anyhow::bail!("no rows to plot");
    }

    let bins = histogram_bins(&values, BIN_COUNT);
    let bin_width = bins[0].hi - bins[0].lo;
    let x_lo = bins[0].lo;
    let x_hi = bins[bins.len() - 1].hi;

    // The density curve shares the count axis, so scale it by n * bin width
    let scale = values.len() as f64 * bin_width;
    let curve: Vec<(f64, f64)> = density_curve(&values, 200)
        .into_iter()
        .map(|(x, y)| (x, y * scale))
        .collect();

    let bar_top = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let curve_top = curve.iter().map(|&(_, y)| y).fold(0.0, f64::max);
    let y_top = bar_top.max(curve_top) * 1.1;

    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of Sleep Quality", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0f64..y_top)?;

    chart
        .configure_mesh()
        .x_desc("Quality of Sleep")
        .y_desc("Count")
        .draw()?;

    chart.draw_series(bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.lo, 0.0), (bin.hi, bin.count as f64)],
            SERIES_COLORS[0].mix(0.6).filled(),
        )
    }))?;

    chart.draw_series(LineSeries::new(curve, &SERIES_COLORS[3]))?;

    root.present()?;
    Ok(())
}

/// Split values into `bin_count` equal-width bins spanning their range.
///
/// The final bin is closed on the right so the maximum lands inside it.
/// Zero-spread input gets a unit-wide range centered on the value.
pub(crate) fn histogram_bins(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi == lo {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lo: lo + width * i as f64,
            hi: lo + width * (i + 1) as f64,
            count,
        })
        .collect()
}
