//! Histogram binning and the Gaussian density overlay.

use crate::profiler::sample_std;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Equal-width histogram over the value range.
///
/// `edges` has one more entry than `counts`. Every bin is half-open except the
/// last, which also takes the maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub bin_width: f64,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// A degenerate range (all values equal) is widened to `[v - 0.5, v + 0.5]`.
    pub fn compute(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (mut lo, mut hi) = match min_max(values) {
            Some(range) => range,
            None => (0.0, 1.0),
        };
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let bin_width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + bin_width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - lo) / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Self {
            edges,
            counts,
            bin_width,
        }
    }

    /// Midpoint of each bin.
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Smoothed density curve drawn over a histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub bandwidth: f64,
}

impl DensityCurve {
    /// Gaussian kernel density estimate on `points` grid points over `[min, max]`.
    ///
    /// The bandwidth follows Scott's rule, `std * n^(-1/5)`. Densities are
    /// multiplied by `scale`; pass `n * bin_width` to overlay the curve on a
    /// count histogram. Returns `None` when the data has no spread.
    pub fn gaussian_kde(values: &[f64], points: usize, scale: f64) -> Option<Self> {
        let std = sample_std(values)?;
        if std == 0.0 || points < 2 {
            return None;
        }
        let (lo, hi) = min_max(values)?;

        let n = values.len() as f64;
        let bandwidth = std * n.powf(-0.2);
        let norm = 1.0 / (n * bandwidth * (2.0 * PI).sqrt());
        let step = (hi - lo) / (points - 1) as f64;

        let xs: Vec<f64> = (0..points).map(|i| lo + step * i as f64).collect();
        let ys = xs
            .iter()
            .map(|&x| {
                let density: f64 = values
                    .iter()
                    .map(|&v| {
                        let z = (x - v) / bandwidth;
                        (-0.5 * z * z).exp()
                    })
                    .sum::<f64>()
                    * norm;
                density * scale
            })
            .collect();

        Some(Self { xs, ys, bandwidth })
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let lo = values.iter().copied().reduce(f64::min)?;
    let hi = values.iter().copied().reduce(f64::max)?;
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_edges_and_counts() {
        let values: Vec<f64> = (0..=30).map(f64::from).collect();
        let hist = Histogram::compute(&values, 30);

        assert_eq!(hist.edges.len(), 31);
        assert_eq!(hist.counts.len(), 30);
        assert_eq!(hist.edges[0], 0.0);
        assert_eq!(hist.edges[30], 30.0);
        assert!((hist.bin_width - 1.0).abs() < 1e-12);
        // maximum lands in the last bin together with 29
        assert_eq!(hist.counts[29], 2);
        assert_eq!(hist.total(), values.len());
    }

    #[test]
    fn test_histogram_degenerate_range() {
        let hist = Histogram::compute(&[4.0, 4.0, 4.0], 30);
        assert_eq!(hist.edges[0], 3.5);
        assert_eq!(hist.edges[30], 4.5);
        assert_eq!(hist.total(), 3);
    }

    #[test]
    fn test_histogram_centers() {
        let hist = Histogram::compute(&[0.0, 10.0], 2);
        assert_eq!(hist.centers(), vec![2.5, 7.5]);
    }

    #[test]
    fn test_kde_integrates_to_scale() {
        let values = [19.0, 23.0, 25.0, 28.0, 31.0, 35.0, 36.0, 41.0, 52.0, 67.0];
        let kde = DensityCurve::gaussian_kde(&values, 200, 1.0).unwrap();

        assert_eq!(kde.xs.len(), 200);
        assert_eq!(kde.xs[0], 19.0);
        assert!((kde.xs[199] - 67.0).abs() < 1e-9);
        assert!(kde.ys.iter().all(|y| *y > 0.0));

        // most of the mass lies inside the data range
        let step = kde.xs[1] - kde.xs[0];
        let area: f64 = kde.ys.iter().sum::<f64>() * step;
        assert!(area > 0.7 && area < 1.05, "area = {}", area);
    }

    #[test]
    fn test_kde_scales_linearly() {
        let values = [1.0, 2.0, 2.5, 4.0];
        let unit = DensityCurve::gaussian_kde(&values, 50, 1.0).unwrap();
        let scaled = DensityCurve::gaussian_kde(&values, 50, 8.0).unwrap();
        for (a, b) in unit.ys.iter().zip(&scaled.ys) {
            assert!((a * 8.0 - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_kde_without_spread() {
        assert!(DensityCurve::gaussian_kde(&[3.0, 3.0], 200, 1.0).is_none());
        assert!(DensityCurve::gaussian_kde(&[3.0], 200, 1.0).is_none());
    }
}
