//! Credit Risk Exploratory Data Analysis
//!
//! Loads a tabular credit dataset from CSV, prints its descriptive reports
//! and renders a six-panel chart figure, built with Rust and Polars.
//!
//! # Overview
//!
//! One run performs, in order:
//!
//! - **Loading**: CSV parsing with the common missing-value markers (`NA`, `null`, ...)
//! - **Describing**: dataset info, numeric and categorical summaries, missing counts
//! - **Charting**: target counts, age and amount histograms with density curves,
//!   duration boxes per target class, top purposes and the correlation matrix
//! - **Rendering**: a 3x2 grid of plotly panels written as one HTML page
//! - **Displaying**: the page is opened in the default browser
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use credit_eda::{EdaConfig, EdaReporter};
//!
//! let config = EdaConfig::builder()
//!     .input_path("credit_score_original.csv")
//!     .show_figure(false)
//!     .build()?;
//!
//! let report = EdaReporter::new(config)?.run(&mut std::io::stdout())?;
//! println!("Figure page: {:?}", report.figure_path);
//! ```
//!
//! # Library use without printing
//!
//! ```rust,ignore
//! use credit_eda::{EdaReporter, EdaConfig, load_csv};
//!
//! let df = load_csv("credit.csv")?;
//! let report = EdaReporter::new(EdaConfig::default())?.analyse(&df)?;
//! assert_eq!(report.info.rows, df.height());
//! ```

pub mod charts;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod profiler;
pub mod render;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use charts::{BoxGroup, BoxStats, ChartSet, DensityCurve, DistributionChart, Histogram};
pub use config::{ChartColumns, ConfigValidationError, EdaConfig, EdaConfigBuilder, OutputFormat};
pub use error::{EdaError, Result as EdaResult, ResultExt};
pub use loader::{load_csv, load_csv_from_str};
pub use pipeline::{EdaReporter, EdaStage};
pub use profiler::DataProfiler;
pub use render::Figure;
pub use reporting::EdaReport;
pub use types::{
    CategoricalSummary, ColumnInfo, CorrelationMatrix, DatasetInfo, MissingCount, NumericSummary,
    ValueCount,
};
pub use utils::{DtypeCategory, get_dtype_category, is_numeric_dtype};
