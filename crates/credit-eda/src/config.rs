//! Configuration types for the EDA report.
//!
//! This module provides configuration options using the builder pattern.
//! The defaults reproduce the fixed report: `credit_score_original.csv` in the
//! working directory, 30 histogram bins, the 5 most frequent purposes and a
//! figure opened in the browser.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input file, resolved against the working directory.
pub const DEFAULT_INPUT_FILE: &str = "credit_score_original.csv";

/// Default title drawn above the chart grid.
pub const DEFAULT_FIGURE_TITLE: &str = "Credit Data Visual Analysis";

/// File name of the figure page when no explicit path is configured.
pub const DEFAULT_REPORT_FILE: &str = "credit_eda_report.html";

/// How the printed reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable tables, printed section by section
    #[default]
    Text,
    /// One pretty-printed JSON document with every report
    Json,
}

/// Names of the columns the chart panel refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartColumns {
    /// Categorical target (bar chart, boxplot grouping)
    pub target: String,
    /// First histogram
    pub age: String,
    /// Second histogram
    pub amount: String,
    /// Boxplot values
    pub duration: String,
    /// Top-N bar chart
    pub purpose: String,
}

impl Default for ChartColumns {
    fn default() -> Self {
        Self {
            target: "credit_risk".to_string(),
            age: "age".to_string(),
            amount: "amount".to_string(),
            duration: "duration".to_string(),
            purpose: "purpose".to_string(),
        }
    }
}

/// Configuration for the EDA report.
///
/// Use [`EdaConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use credit_eda::config::EdaConfig;
///
/// let config = EdaConfig::builder()
///     .input_path("data/credit.csv")
///     .show_figure(false)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaConfig {
    /// CSV file to analyse.
    /// Default: "credit_score_original.csv"
    pub input_path: PathBuf,

    /// Where the figure page is written.
    /// If None, `credit_eda_report.html` in the system temp directory.
    /// Default: None
    pub report_path: Option<PathBuf>,

    /// Whether to open the figure page in the default browser.
    /// Default: true
    pub show_figure: bool,

    /// Format of the printed reports.
    /// Default: Text
    pub output_format: OutputFormat,

    /// Columns referenced by the chart panel.
    pub columns: ChartColumns,

    /// Number of equal-width histogram bins.
    /// Default: 30
    pub histogram_bins: usize,

    /// Number of grid points the density curve is evaluated on.
    /// Default: 200
    pub kde_points: usize,

    /// Number of most frequent purposes shown.
    /// Default: 5
    pub top_n: usize,

    /// Title above the chart grid.
    pub figure_title: String,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            report_path: None,
            show_figure: true,
            output_format: OutputFormat::default(),
            columns: ChartColumns::default(),
            histogram_bins: 30,
            kde_points: 200,
            top_n: 5,
            figure_title: DEFAULT_FIGURE_TITLE.to_string(),
        }
    }
}

impl EdaConfig {
    /// Create a new configuration builder.
    pub fn builder() -> EdaConfigBuilder {
        EdaConfigBuilder::default()
    }

    /// Resolved location of the figure page.
    pub fn resolved_report_path(&self) -> PathBuf {
        self.report_path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_REPORT_FILE))
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.histogram_bins == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "histogram_bins".to_string(),
                value: self.histogram_bins,
                min: 1,
            });
        }

        if self.kde_points < 2 {
            return Err(ConfigValidationError::InvalidCount {
                field: "kde_points".to_string(),
                value: self.kde_points,
                min: 2,
            });
        }

        if self.top_n == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "top_n".to_string(),
                value: self.top_n,
                min: 1,
            });
        }

        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyInputPath);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid value for '{field}': {value} (must be at least {min})")]
    InvalidCount {
        field: String,
        value: usize,
        min: usize,
    },

    #[error("Input path must not be empty")]
    EmptyInputPath,
}

/// Builder for [`EdaConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct EdaConfigBuilder {
    input_path: Option<PathBuf>,
    report_path: Option<PathBuf>,
    show_figure: Option<bool>,
    output_format: Option<OutputFormat>,
    columns: Option<ChartColumns>,
    histogram_bins: Option<usize>,
    kde_points: Option<usize>,
    top_n: Option<usize>,
    figure_title: Option<String>,
}

impl EdaConfigBuilder {
    /// Set the CSV file to analyse.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set where the figure page is written.
    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    /// Open the figure in the browser, or only write it (batch mode).
    pub fn show_figure(mut self, show: bool) -> Self {
        self.show_figure = Some(show);
        self
    }

    /// Set the format of the printed reports.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Override the columns used by the chart panel.
    pub fn columns(mut self, columns: ChartColumns) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the number of histogram bins.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Set the number of density grid points.
    pub fn kde_points(mut self, points: usize) -> Self {
        self.kde_points = Some(points);
        self
    }

    /// Set how many of the most frequent purposes are charted.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    /// Set the title above the chart grid.
    pub fn figure_title(mut self, title: impl Into<String>) -> Self {
        self.figure_title = Some(title.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `EdaConfig` or an error if validation fails.
    pub fn build(self) -> Result<EdaConfig, ConfigValidationError> {
        let defaults = EdaConfig::default();
        let config = EdaConfig {
            input_path: self.input_path.unwrap_or(defaults.input_path),
            report_path: self.report_path,
            show_figure: self.show_figure.unwrap_or(defaults.show_figure),
            output_format: self.output_format.unwrap_or_default(),
            columns: self.columns.unwrap_or_default(),
            histogram_bins: self.histogram_bins.unwrap_or(defaults.histogram_bins),
            kde_points: self.kde_points.unwrap_or(defaults.kde_points),
            top_n: self.top_n.unwrap_or(defaults.top_n),
            figure_title: self.figure_title.unwrap_or(defaults.figure_title),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EdaConfig::default();
        assert_eq!(config.input_path, PathBuf::from("credit_score_original.csv"));
        assert_eq!(config.histogram_bins, 30);
        assert_eq!(config.kde_points, 200);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.columns.target, "credit_risk");
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.show_figure);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = EdaConfig::builder()
            .input_path("data/other.csv")
            .report_path("out/figure.html")
            .show_figure(false)
            .output_format(OutputFormat::Json)
            .histogram_bins(10)
            .top_n(3)
            .build()
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("data/other.csv"));
        assert_eq!(config.resolved_report_path(), PathBuf::from("out/figure.html"));
        assert!(!config.show_figure);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.histogram_bins, 10);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.kde_points, 200);
    }

    #[test]
    fn test_default_report_path_in_temp_dir() {
        let config = EdaConfig::default();
        let path = config.resolved_report_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(DEFAULT_REPORT_FILE));
    }

    #[test]
    fn test_validation_zero_bins() {
        let result = EdaConfig::builder().histogram_bins(0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidCount { min: 1, .. }
        ));
    }

    #[test]
    fn test_validation_kde_points() {
        let result = EdaConfig::builder().kde_points(1).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidCount { min: 2, .. }
        ));
    }

    #[test]
    fn test_validation_zero_top_n() {
        assert!(EdaConfig::builder().top_n(0).build().is_err());
    }

    #[test]
    fn test_validation_empty_input() {
        let result = EdaConfig::builder().input_path("").build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyInputPath
        ));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "input_path": "credit.csv",
            "report_path": null,
            "show_figure": false,
            "output_format": "Json",
            "columns": {
                "target": "risk",
                "age": "age",
                "amount": "amount",
                "duration": "months",
                "purpose": "purpose"
            },
            "histogram_bins": 20,
            "kde_points": 100,
            "top_n": 5,
            "figure_title": "Credit"
        }"#;

        let config: EdaConfig = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(config.columns.target, "risk");
        assert_eq!(config.columns.duration, "months");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.validate().is_ok());
    }
}
