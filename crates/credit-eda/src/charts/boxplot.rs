//! Box plot statistics for a numeric column split by a categorical one.

use crate::error::Result;
use crate::profiler::quantile_sorted;
use crate::utils::{optional_f64_values, optional_string_values, require_column};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Whisker reach as a multiple of the interquartile range.
pub const WHISKER_IQR: f64 = 1.5;

/// Five-number summary with Tukey whiskers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest value within `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Compute the summary of `values`; `None` when there are none.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR * iqr;
        let high_fence = q3 + WHISKER_IQR * iqr;

        let inside = sorted.iter().copied().filter(|v| (low_fence..=high_fence).contains(v));
        let lower_whisker = inside.clone().reduce(f64::min).unwrap_or(q1);
        let upper_whisker = inside.reduce(f64::max).unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

/// One box of the grouped plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGroup {
    pub group: String,
    #[serde(skip)]
    pub values: Vec<f64>,
    pub stats: Option<BoxStats>,
}

/// Split `value_col` by the labels of `group_col`.
///
/// Groups appear in order of first appearance. Rows with a missing label are
/// left out; rows with a missing value are left out of their group.
pub fn grouped_box_stats(df: &DataFrame, group_col: &str, value_col: &str) -> Result<Vec<BoxGroup>> {
    let labels = optional_string_values(require_column(df, group_col)?)?;
    let values = optional_f64_values(require_column(df, value_col)?)?;

    let mut groups: Vec<BoxGroup> = Vec::new();
    for (label, value) in labels.into_iter().zip(values) {
        let Some(label) = label else { continue };
        let idx = match groups.iter().position(|g| g.group == label) {
            Some(idx) => idx,
            None => {
                groups.push(BoxGroup {
                    group: label,
                    values: Vec::new(),
                    stats: None,
                });
                groups.len() - 1
            }
        };
        if let Some(v) = value {
            groups[idx].values.push(v);
        }
    }

    for group in &mut groups {
        group.stats = BoxStats::compute(&group.values);
    }

    Ok(groups)
}
