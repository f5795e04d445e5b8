//! Numeric summary statistics.

use crate::error::Result;
use crate::types::NumericSummary;
use crate::utils::f64_values;
use polars::prelude::*;

/// Summarize a numeric column: count, mean, std, min, quartiles, max.
pub(crate) fn summarize_numeric(series: &Series) -> Result<NumericSummary> {
    let mut values = f64_values(series)?;
    values.sort_by(f64::total_cmp);
    let column = Float64Chunked::from_slice(series.name().clone(), &values);

    Ok(NumericSummary {
        column: series.name().to_string(),
        count: values.len(),
        mean: column.mean(),
        std: sample_std(&values),
        min: values.first().copied(),
        q25: quantile_sorted(&values, 0.25),
        q50: quantile_sorted(&values, 0.5),
        q75: quantile_sorted(&values, 0.75),
        max: values.last().copied(),
    })
}

/// Sample standard deviation (n - 1 denominator).
///
/// Undefined below two observations.
pub(crate) fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    Float64Chunked::from_slice(PlSmallStr::EMPTY, values).std(1)
}

/// Quantile of sorted values with linear interpolation between closest ranks.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
