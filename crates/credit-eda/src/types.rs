//! Value types produced by profiling and charting.
//!
//! All of them serialize with serde so the `--json` output carries them as is.

use serde::{Deserialize, Serialize};

/// One row of the info table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: String,
    pub non_null_count: usize,
}

/// Shape and per-column layout of the dataset, as printed by `info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub rows: usize,
    pub columns: usize,
    pub column_info: Vec<ColumnInfo>,
    /// `(dtype, column count)` sorted by dtype name.
    pub dtype_counts: Vec<(String, usize)>,
    pub memory_usage_bytes: usize,
}

/// Descriptive statistics of one numeric column.
///
/// Values that are undefined for the column (e.g. `std` of a single value)
/// are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Describe statistics of one text column.
///
/// `top` is `None` when the column has no non-null value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub column: String,
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: usize,
}

/// Number of null cells in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// A label and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Pairwise Pearson correlations between numeric columns.
///
/// `values[i][j]` is the correlation of `columns[i]` and `columns[j]`,
/// `None` where it is undefined (fewer than two paired observations or a
/// constant column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Number of rows (and columns) in the matrix.
    pub fn dimension(&self) -> usize {
        self.columns.len()
    }

    /// Coefficient for a pair of column names, `None` if either is unknown
    /// or the coefficient is undefined.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == row)?;
        let j = self.columns.iter().position(|c| c == col)?;
        self.values[i][j]
    }
}
