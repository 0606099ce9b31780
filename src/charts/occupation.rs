//! Average sleep quality per occupation as a bar chart.

use anyhow::Result;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

use super::{code_label, series_color};
use crate::pipeline::clean::EncodingMap;
use crate::pipeline::schema::{OCCUPATION, QUALITY_OF_SLEEP};
use crate::pipeline::stats::group_values;

/// Bar chart of mean sleep quality per occupation, ordered from the
/// worst-sleeping occupation to the best.
pub fn quality_by_occupation_bars(
    df: &DataFrame,
    encodings: &EncodingMap,
    path: &Path,
) -> Result<()> {
    let means = occupation_means(df, encodings)?;
    if means.is_empty() {
        anyhow::bail!("no rows to plot");
    }

    let labels: Vec<&str> = means.iter().map(|(label, _)| label.as_str()).collect();
    let y_max = means.iter().map(|&(_, m)| m).fold(0.0, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Sleep Quality by Occupation", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(120)
        .y_label_area_size(60)
        .build_cartesian_2d((0..means.len()).into_segmented(), 0f64..y_top)?;

    chart
        .configure_mesh()
        .x_desc("Occupation")
        .y_desc("Average Quality of Sleep")
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].to_string(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(means.iter().enumerate().map(|(i, &(_, mean))| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), mean),
            ],
            series_color(i).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Mean sleep quality per occupation label, sorted ascending by mean.
pub(crate) fn occupation_means(
    df: &DataFrame,
    encodings: &EncodingMap,
) -> Result<Vec<(String, f64)>> {
    let mut means: Vec<(String, f64)> = group_values(df, OCCUPATION, QUALITY_OF_SLEEP)?
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(code, values)| {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (code_label(encodings, OCCUPATION, code), mean)
        })
        .collect();
    means.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    Ok(means)
}
