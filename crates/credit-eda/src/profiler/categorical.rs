//! Frequency counts for categorical columns.

use crate::error::Result;
use crate::types::{CategoricalSummary, ValueCount};
use polars::prelude::*;

const VALUE_COLUMN: &str = "value";
const COUNT_COLUMN: &str = "count";

/// Count each non-null value, most frequent first.
///
/// Ties keep the order in which the values first appear in the column, so the
/// result is the same on every run over the same data.
pub fn value_counts(series: &Series) -> Result<Vec<ValueCount>> {
    grouped_counts(series, true)
}

/// Count each non-null value, in order of first appearance.
pub fn counts_in_appearance_order(series: &Series) -> Result<Vec<ValueCount>> {
    grouped_counts(series, false)
}

/// Group the values by their text label and count each group.
///
/// Non-string columns are cast to `String` first, so a numeric target still
/// yields usable labels.
fn grouped_counts(series: &Series, by_frequency: bool) -> Result<Vec<ValueCount>> {
    let mut labels = series.cast(&DataType::String)?.drop_nulls();
    labels.rename(VALUE_COLUMN.into());

    let mut grouped = labels
        .into_frame()
        .lazy()
        .group_by_stable([col(VALUE_COLUMN)])
        .agg([len().alias(COUNT_COLUMN)]);
    if by_frequency {
        grouped = grouped.sort(
            [COUNT_COLUMN],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        );
    }
    let counts_df = grouped.collect()?;

    let values = counts_df.column(VALUE_COLUMN)?.as_materialized_series();
    let counts = counts_df
        .column(COUNT_COLUMN)?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;

    Ok(values
        .str()?
        .into_iter()
        .zip(counts.u64()?)
        .filter_map(|(value, count)| {
            Some(ValueCount {
                value: value?.to_string(),
                count: count? as usize,
            })
        })
        .collect())
}

/// The `n` most frequent values of a column.
pub fn top_values(series: &Series, n: usize) -> Result<Vec<ValueCount>> {
    let mut counts = value_counts(series)?;
    counts.truncate(n);
    Ok(counts)
}

/// Summarize a text column: count, unique, top, freq.
pub(crate) fn summarize_categorical(series: &Series) -> Result<CategoricalSummary> {
    let counts = value_counts(series)?;
    let top = counts.first();

    Ok(CategoricalSummary {
        column: series.name().to_string(),
        count: series.len() - series.null_count(),
        unique: counts.len(),
        top: top.map(|vc| vc.value.clone()),
        freq: top.map(|vc| vc.count).unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vc(value: &str, count: usize) -> ValueCount {
        ValueCount {
            value: value.to_string(),
            count,
        }
    }

    #[test]
    fn test_value_counts_sorted_descending() {
        let series = Series::new("purpose".into(), &["car", "tv", "car", "business", "tv", "car"]);
        let counts = value_counts(&series).unwrap();
        assert_eq!(counts, vec![vc("car", 3), vc("tv", 2), vc("business", 1)]);
    }

    #[test]
    fn test_value_counts_ties_keep_appearance_order() {
        let series = Series::new("purpose".into(), &["retraining", "car", "car", "retraining"]);
        let counts = value_counts(&series).unwrap();
        assert_eq!(counts, vec![vc("retraining", 2), vc("car", 2)]);
    }

    #[test]
    fn test_value_counts_skip_nulls() {
        let series = Series::new("purpose".into(), &[Some("car"), None, Some("car"), None]);
        assert_eq!(value_counts(&series).unwrap(), vec![vc("car", 2)]);
    }

    #[test]
    fn test_counts_in_appearance_order() {
        let series = Series::new("credit_risk".into(), &["bad", "good", "good", "bad", "good"]);
        let counts = counts_in_appearance_order(&series).unwrap();
        assert_eq!(counts, vec![vc("bad", 2), vc("good", 3)]);
    }

    #[test]
    fn test_numeric_labels_are_counted_as_text() {
        let series = Series::new("credit_risk".into(), &[Some(1i64), Some(0), Some(1), None]);
        let counts = value_counts(&series).unwrap();
        assert_eq!(counts, vec![vc("1", 2), vc("0", 1)]);
    }

    #[test]
    fn test_value_counts_column_named_count() {
        let series = Series::new("count".into(), &["x", "y", "x"]);
        assert_eq!(value_counts(&series).unwrap(), vec![vc("x", 2), vc("y", 1)]);
    }

    #[test]
    fn test_value_counts_all_null() {
        let series = Series::new("purpose".into(), &[None::<&str>, None]);
        assert!(value_counts(&series).unwrap().is_empty());
    }

    #[test]
    fn test_top_values_truncates() {
        let series = Series::new("purpose".into(), &["a", "b", "c", "a", "b", "a", "d", "e", "f"]);
        let top = top_values(&series, 5).unwrap();
        assert_eq!(top.len(), 5);
        assert_eq!(top[0], vc("a", 3));
        assert_eq!(top[1], vc("b", 2));
    }

    #[test]
    fn test_summarize_categorical() {
        let series = Series::new(
            "credit_risk".into(),
            &[Some("good"), Some("bad"), Some("good"), None],
        );
        let summary = summarize_categorical(&series).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.unique, 2);
        assert_eq!(summary.top.as_deref(), Some("good"));
        assert_eq!(summary.freq, 2);
    }
}
