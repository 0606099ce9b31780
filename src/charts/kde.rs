//! Gaussian kernel density estimation for distribution overlays.

use crate::pipeline::profile::quantile_sorted;

const SQRT_2PI: f64 = 2.5066282746310002;

/// Rule-of-thumb bandwidth: `0.9 * min(std, IQR / 1.34) * n^(-1/5)`.
///
/// Falls back to 1.0 when the sample has no spread, so the resulting
/// curve is still drawable.
pub fn silverman_bandwidth(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 1.0;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let sum_sq_dev: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    let std = (sum_sq_dev / (n - 1) as f64).sqrt();

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let iqr = quantile_sorted(&sorted, 0.75) - quantile_sorted(&sorted, 0.25);

    let spread = if iqr > 0.0 { std.min(iqr / 1.34) } else { std };
    let bandwidth = 0.9 * spread * (n as f64).powf(-0.2);
    if bandwidth > 0.0 {
        bandwidth
    } else {
        1.0
    }
}

/// Density estimates at the given evaluation points.
pub fn gaussian_kde(values: &[f64], bandwidth: f64, points: &[f64]) -> Vec<f64> {
    let n = values.len() as f64;
    points
        .iter()
        .map(|&x| {
            let sum: f64 = values
                .iter()
                .map(|&v| {
                    let u = (x - v) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum();
            sum / (n * bandwidth * SQRT_2PI)
        })
        .collect()
}

/// Smooth density curve spanning the sample range plus three bandwidths.
pub fn density_curve(values: &[f64], points: usize) -> Vec<(f64, f64)> {
    if values.is_empty() || points < 2 {
        return Vec::new();
    }

    let bandwidth = silverman_bandwidth(values);
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min) - 3.0 * bandwidth;
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 3.0 * bandwidth;
    let step = (hi - lo) / (points - 1) as f64;

    let xs: Vec<f64> = (0..points).map(|i| lo + step * i as f64).collect();
    let ys = gaussian_kde(values, bandwidth, &xs);
    xs.into_iter().zip(ys).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bandwidth_positive_for_spread_data() {
        let values = [4.0, 5.0, 6.0, 7.0, 8.0, 6.0, 5.0, 7.0];
        let bw = silverman_bandwidth(&values);
        assert!(bw > 0.0 && bw < 2.0, "Unexpected bandwidth {}", bw);
    }

    #[test]
    fn test_bandwidth_falls_back_for_constant_data() {
        let values = [5.0; 12];
        assert_eq!(silverman_bandwidth(&values), 1.0);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let values = [2.0, 3.0, 3.5, 4.0, 4.5, 5.0, 6.0, 7.0, 8.0, 9.0];
        let curve = density_curve(&values, 400);

        let mut integral = 0.0;
        for pair in curve.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            integral += (x1 - x0) * (y0 + y1) / 2.0;
        }
        assert!(
            (integral - 1.0).abs() < 0.02,
            "Density should integrate to about 1, got {}",
            integral
        );
    }

    #[test]
    fn test_density_peaks_near_center_of_symmetric_sample() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let curve = density_curve(&values, 200);
        let peak = curve
            .iter()
            .cloned()
            .fold((f64::NAN, f64::NEG_INFINITY), |acc, (x, y)| {
                if y > acc.1 {
                    (x, y)
                } else {
                    acc
                }
            });
        assert!((peak.0 - 5.0).abs() < 1.5, "Peak at {}, expected near 5", peak.0);
    }
}
