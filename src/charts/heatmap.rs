//! Correlation matrix heatmap over the numeric columns.

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use polars::prelude::DataFrame;
use std::path::Path;

use crate::pipeline::stats::correlation_matrix;

/// Heatmap of pairwise Pearson correlations with the coefficient
/// printed in each cell. The first column sits in the top-left corner.
pub fn correlation_heatmap(df: &DataFrame, path: &Path) -> Result<()> {
    let (names, matrix) = correlation_matrix(df)?;
    let n = names.len();

    let root = BitMapBackend::new(path, (950, 850)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation Matrix", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(140)
        .y_label_area_size(140)
        .build_cartesian_2d(
            (0..n as i32).into_segmented(),
            (0..n as i32).into_segmented(),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(j) if (0..n as i32).contains(j) => names[*j as usize].clone(),
            _ => String::new(),
        })
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(k) if (0..n as i32).contains(k) => {
                names[n - 1 - *k as usize].clone()
            }
            _ => String::new(),
        })
        .draw()?;

    for i in 0..n {
        // Matrix row 0 renders at the top of the y axis
        let flip = (n - 1 - i) as i32;
        for j in 0..n {
            let r = matrix[(i, j)];
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (SegmentValue::Exact(j as i32), SegmentValue::Exact(flip)),
                    (
                        SegmentValue::Exact(j as i32 + 1),
                        SegmentValue::Exact(flip + 1),
                    ),
                ],
                diverging_color(r).filled(),
            )))?;

            let text_color = if r.abs() > 0.6 { WHITE } else { BLACK };
            let style = TextStyle::from(("sans-serif", 14).into_font())
                .color(&text_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.2}", r),
                (
                    SegmentValue::CenterOf(j as i32),
                    SegmentValue::CenterOf(flip),
                ),
                style,
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Blue-white-red ramp over [-1, 1], white at zero.
pub(crate) fn diverging_color(r: f64) -> RGBColor {
    const BLUE_END: (u8, u8, u8) = (33, 102, 172);
    const RED_END: (u8, u8, u8) = (178, 24, 43);

    let r = r.clamp(-1.0, 1.0);
    if r < 0.0 {
        let f = -r;
        RGBColor(
            lerp(255, BLUE_END.0, f),
            lerp(255, BLUE_END.1, f),
            lerp(255, BLUE_END.2, f),
        )
    } else {
        RGBColor(
            lerp(255, RED_END.0, r),
            lerp(255, RED_END.1, r),
            lerp(255, RED_END.2, r),
        )
    }
}

fn lerp(a: u8, b: u8, f: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * f).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(diverging_color(1.0), RGBColor(178, 24, 43));
        assert_eq!(diverging_color(-1.0), RGBColor(33, 102, 172));
        assert_eq!(diverging_color(0.0), RGBColor(255, 255, 255));
    }

    #[test]
    fn test_ramp_clamps_out_of_range() {
        assert_eq!(diverging_color(5.0), diverging_color(1.0));
        assert_eq!(diverging_color(-5.0), diverging_color(-1.0));
    }

    #[test]
    fn test_midpoints_blend_toward_white() {
        let half = diverging_color(0.5);
        assert!(half.0 > 178 && half.0 < 255);
    }
}
