//! Data behind the six-panel figure.
//!
//! Every panel is computed here as plain data so it can be tested and
//! serialized independently of how it is drawn. The [`render`](crate::render)
//! module turns a [`ChartSet`] into plotly traces.
//!
//! Panel layout (3 rows x 2 columns):
//!
//! | row | left                        | right                       |
//! |-----|-----------------------------|-----------------------------|
//! | 1   | target distribution         | age histogram + density     |
//! | 2   | amount histogram + density  | duration by target (box)    |
//! | 3   | top purposes                | correlation heatmap         |

mod boxplot;
mod histogram;

pub use boxplot::{BoxGroup, BoxStats, WHISKER_IQR, grouped_box_stats};
pub use histogram::{DensityCurve, Histogram};

use crate::config::EdaConfig;
use crate::error::{EdaError, Result, ResultExt};
use crate::profiler::{DataProfiler, counts_in_appearance_order, top_values};
use crate::types::{CorrelationMatrix, ValueCount};
use crate::utils::{f64_values, is_numeric_dtype, require_column};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Histogram of one numeric column with its density overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionChart {
    pub column: String,
    pub histogram: Histogram,
    pub density: Option<DensityCurve>,
}

impl DistributionChart {
    /// Bin a numeric column and fit the overlay scaled to counts.
    pub fn build(df: &DataFrame, column: &str, bins: usize, kde_points: usize) -> Result<Self> {
        let values = f64_values(require_column(df, column)?)?;
        if values.is_empty() {
            return Err(EdaError::NoValidValues(column.to_string()));
        }
        if values.iter().any(|v| v.is_infinite()) {
            return Err(EdaError::NoValidValues(column.to_string())
                .with_context(format!("Column '{}' has an infinite value", column)));
        }

        let histogram = Histogram::compute(&values, bins);
        let scale = values.len() as f64 * histogram.bin_width;
        let density = DensityCurve::gaussian_kde(&values, kde_points, scale);

        Ok(Self {
            column: column.to_string(),
            histogram,
            density,
        })
    }
}

/// Count of each label of a categorical column, in display order.
///
/// Text labels keep their order of first appearance; numeric labels are
/// sorted ascending.
pub fn category_counts(df: &DataFrame, column: &str) -> Result<Vec<ValueCount>> {
    let series = require_column(df, column)?;
    let mut counts = counts_in_appearance_order(series)?;

    if is_numeric_dtype(series.dtype()) {
        counts.sort_by(|a, b| {
            let a = a.value.parse::<f64>().unwrap_or(f64::NAN);
            let b = b.value.parse::<f64>().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        });
    }

    Ok(counts)
}

/// The six panels of the figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    /// Column name of the target the bars and boxes are keyed by.
    pub target_column: String,
    pub target_distribution: Vec<ValueCount>,
    pub age: DistributionChart,
    pub amount: DistributionChart,
    pub duration_column: String,
    pub duration_by_target: Vec<BoxGroup>,
    pub purpose_column: String,
    /// Most frequent purposes, most frequent first.
    pub top_purposes: Vec<ValueCount>,
    pub correlation: CorrelationMatrix,
}

impl ChartSet {
    /// Compute every panel, in panel order.
    ///
    /// The first missing column aborts the build.
    pub fn build(df: &DataFrame, config: &EdaConfig) -> Result<Self> {
        let columns = &config.columns;

        let target_distribution =
            category_counts(df, &columns.target).context("Target distribution")?;
        debug!("Target classes: {}", target_distribution.len());

        let age = DistributionChart::build(df, &columns.age, config.histogram_bins, config.kde_points)
            .context("Age distribution")?;
        let amount =
            DistributionChart::build(df, &columns.amount, config.histogram_bins, config.kde_points)
                .context("Amount distribution")?;

        let duration_by_target = grouped_box_stats(df, &columns.target, &columns.duration)
            .context("Duration by target")?;

        let top_purposes = top_values(require_column(df, &columns.purpose)?, config.top_n)
            .context("Top purposes")?;
        debug!("Top purposes: {:?}", top_purposes);

        let correlation = DataProfiler::correlation(df).context("Correlation matrix")?;

        Ok(Self {
            target_column: columns.target.clone(),
            target_distribution,
            age,
            amount,
            duration_column: columns.duration.clone(),
            duration_by_target,
            purpose_column: columns.purpose.clone(),
            top_purposes,
            correlation,
        })
    }
}
