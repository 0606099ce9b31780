//! Sleep quality box plot split by gender.

use anyhow::Result;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

use super::{code_label, padded_range, series_color};
use crate::pipeline::clean::EncodingMap;
use crate::pipeline::schema::{GENDER, QUALITY_OF_SLEEP};
use crate::pipeline::stats::group_values;

/// One box per gender code, whiskers from the full value range.
pub fn quality_by_gender_boxplot(
    df: &DataFrame,
    encodings: &EncodingMap,
    path: &Path,
) -> Result<()> {
    let groups = group_values(df, GENDER, QUALITY_OF_SLEEP)?;
    if groups.is_empty() {
        anyhow::bail!("no rows to plot");
    }

    let labels: Vec<String> = groups
        .iter()
        .map(|(code, _)| code_label(encodings, GENDER, *code))
        .collect();
    let all_values: Vec<f64> = groups.iter().flat_map(|(_, v)| v.iter().copied()).collect();
    let (y_lo, y_hi) = padded_range(&all_values);

    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sleep Quality by Gender", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0..groups.len()).into_segmented(),
            (y_lo as f32)..(y_hi as f32),
        )?;

    chart
        .configure_mesh()
        .x_desc("Gender")
        .y_desc("Quality of Sleep")
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].clone(),
            _ => String::new(),
        })
        .draw()?;

    for (i, (_, values)) in groups.iter().enumerate() {
        let quartiles = Quartiles::new(values);
        chart.draw_series(std::iter::once(
            Boxplot::new_vertical(SegmentValue::CenterOf(i), &quartiles)
                .width(40)
                .style(series_color(i)),
        ))?;
    }

    root.present()?;
    Ok(())
}
