//! Descriptive profiling of the loaded dataset.
//!
//! This module provides the printed reports of the EDA run:
//! - Dataset layout (shape, dtypes, non-null counts)
//! - Numeric summary statistics
//! - Categorical summary statistics
//! - Missing-value counts
//! - The correlation matrix behind the heatmap
//!
//! Every function borrows the frame immutably; nothing here mutates or
//! derives columns.

mod categorical;
mod correlation;
mod statistics;

use crate::error::Result;
use crate::types::{
    CategoricalSummary, ColumnInfo, CorrelationMatrix, DatasetInfo, MissingCount, NumericSummary,
};
use crate::utils::{categorical_column_names, numeric_column_names, dtype_label, require_column};
use polars::prelude::*;
use tracing::debug;

pub use categorical::{counts_in_appearance_order, top_values, value_counts};
pub(crate) use statistics::{quantile_sorted, sample_std};

/// Data profiler for the descriptive reports.
pub struct DataProfiler;

impl DataProfiler {
    /// Shape, dtypes and non-null counts of every column.
    pub fn info(df: &DataFrame) -> DatasetInfo {
        let column_info: Vec<ColumnInfo> = df
            .get_columns()
            .iter()
            .map(|col| ColumnInfo {
                name: col.name().to_string(),
                dtype: dtype_label(col.dtype()),
                non_null_count: col.len() - col.null_count(),
            })
            .collect();

        let mut dtype_counts: Vec<(String, usize)> = Vec::new();
        for info in &column_info {
            match dtype_counts.iter_mut().find(|(dtype, _)| *dtype == info.dtype) {
                Some((_, count)) => *count += 1,
                None => dtype_counts.push((info.dtype.clone(), 1)),
            }
        }
        dtype_counts.sort();

        DatasetInfo {
            rows: df.height(),
            columns: df.width(),
            column_info,
            dtype_counts,
            memory_usage_bytes: df.estimated_size(),
        }
    }

    /// Summary statistics for every numeric column, in frame order.
    pub fn describe_numeric(df: &DataFrame) -> Result<Vec<NumericSummary>> {
        let summaries = numeric_column_names(df)
            .iter()
            .map(|name| statistics::summarize_numeric(require_column(df, name)?))
            .collect::<Result<Vec<_>>>()?;
        debug!("Described {} numeric columns", summaries.len());
        Ok(summaries)
    }

    /// Summary statistics for every text column, in frame order.
    pub fn describe_categorical(df: &DataFrame) -> Result<Vec<CategoricalSummary>> {
        let summaries = categorical_column_names(df)
            .iter()
            .map(|name| categorical::summarize_categorical(require_column(df, name)?))
            .collect::<Result<Vec<_>>>()?;
        debug!("Described {} categorical columns", summaries.len());
        Ok(summaries)
    }

    /// Number of missing cells per column, in frame order.
    pub fn missing_values(df: &DataFrame) -> Vec<MissingCount> {
        df.get_columns()
            .iter()
            .map(|col| MissingCount {
                column: col.name().to_string(),
                missing: col.null_count(),
            })
            .collect()
    }

    /// Pairwise correlation of all numeric columns.
    pub fn correlation(df: &DataFrame) -> Result<CorrelationMatrix> {
        correlation::correlation_matrix(df)
    }
}
