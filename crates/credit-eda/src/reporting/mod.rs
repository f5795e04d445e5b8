//! Report assembly and printing.
//!
//! [`EdaReport`] gathers every printed statistic and the chart data of one
//! run. It is what `--json` prints and what library callers get back.
//!
//! # Example
//!
//! ```rust,ignore
//! use credit_eda::reporting::{EdaReport, text};
//!
//! print!("{}", text::format_numeric(&report.numeric_summary));
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod text;

use crate::charts::ChartSet;
use crate::types::{CategoricalSummary, DatasetInfo, MissingCount, NumericSummary};
use serde::{Deserialize, Serialize};

/// Titles of the printed sections, in print order.
pub const SECTION_TITLES: [&str; 4] = [
    "Dataset overview (info)",
    "Descriptive statistics for numeric columns",
    "Descriptive statistics for categorical columns",
    "Missing values per column",
];

/// Everything one EDA run computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the analysed CSV file
    pub input_file: String,
    /// Where the figure page was written, once rendered
    pub figure_path: Option<String>,
    pub info: DatasetInfo,
    pub numeric_summary: Vec<NumericSummary>,
    pub categorical_summary: Vec<CategoricalSummary>,
    pub missing_values: Vec<MissingCount>,
    pub charts: ChartSet,
}

impl EdaReport {
    /// Total missing cells across all columns.
    pub fn total_missing(&self) -> usize {
        self.missing_values.iter().map(|m| m.missing).sum()
    }

    /// All four text sections with their headers, as printed in text mode.
    pub fn to_text(&self) -> String {
        let bodies = [
            text::format_info(&self.info),
            text::format_numeric(&self.numeric_summary),
            text::format_categorical(&self.categorical_summary),
            text::format_missing(&self.missing_values),
        ];

        SECTION_TITLES
            .iter()
            .zip(bodies)
            .enumerate()
            .map(|(idx, (title, body))| format!("{}{}", text::section_header(idx + 1, title), body))
            .collect()
    }
}
