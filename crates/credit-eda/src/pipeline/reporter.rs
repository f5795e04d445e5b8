//! The EDA run: load, describe, chart, render and display.

use crate::charts::ChartSet;
use crate::config::{EdaConfig, OutputFormat};
use crate::error::{EdaError, Result, ResultExt};
use crate::loader::load_csv;
use crate::pipeline::EdaStage;
use crate::profiler::DataProfiler;
use crate::render::Figure;
use crate::reporting::{EdaReport, SECTION_TITLES, text};
use chrono::Local;
use polars::prelude::*;
use std::io::Write;
use tracing::info;

/// Runs the exploratory analysis described by an [`EdaConfig`].
///
/// # Example
///
/// ```rust,ignore
/// use credit_eda::{EdaConfig, EdaReporter};
///
/// let reporter = EdaReporter::new(EdaConfig::default())?;
/// let report = reporter.run(&mut std::io::stdout())?;
/// println!("{} missing cells", report.total_missing());
/// ```
#[derive(Debug, Clone)]
pub struct EdaReporter {
    config: EdaConfig,
}

impl EdaReporter {
    /// Create a reporter, rejecting invalid configurations.
    pub fn new(config: EdaConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| EdaError::InvalidConfig(e.to_string()))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EdaConfig {
        &self.config
    }

    /// Execute the whole run against the configured input file.
    ///
    /// In text mode each report is written to `out` as soon as it is
    /// computed, so a failing chart still leaves the earlier sections on
    /// screen. In JSON mode the full report is written once the figure page
    /// exists.
    pub fn run(&self, out: &mut dyn Write) -> Result<EdaReport> {
        info!("{}", EdaStage::Loading);
        let df = load_csv(&self.config.input_path)?;

        let mut report = match self.config.output_format {
            OutputFormat::Text => self.analyse_inner(&df, Some(&mut *out))?,
            OutputFormat::Json => self.analyse_inner(&df, None)?,
        };

        info!("{}", EdaStage::Rendering);
        let path = Figure::from_report(&report, &self.config)
            .write(&self.config.resolved_report_path())
            .context("Writing figure")?;
        report.figure_path = Some(path.display().to_string());

        if self.config.show_figure {
            info!("{}", EdaStage::Displaying);
            Figure::display(&path)?;
        } else {
            info!("Figure display skipped; page left at {}", path.display());
        }

        if self.config.output_format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        out.flush()?;

        Ok(report)
    }

    /// Compute every report and chart for an already loaded frame.
    ///
    /// Nothing is printed and no figure is written.
    pub fn analyse(&self, df: &DataFrame) -> Result<EdaReport> {
        self.analyse_inner(df, None)
    }

    fn analyse_inner(&self, df: &DataFrame, mut out: Option<&mut dyn Write>) -> Result<EdaReport> {
        info!("{}", EdaStage::Describing);

        let info = DataProfiler::info(df);
        emit(&mut out, 1, text::format_info(&info))?;

        let numeric_summary = DataProfiler::describe_numeric(df)?;
        emit(&mut out, 2, text::format_numeric(&numeric_summary))?;

        let categorical_summary = DataProfiler::describe_categorical(df)?;
        emit(&mut out, 3, text::format_categorical(&categorical_summary))?;

        let missing_values = DataProfiler::missing_values(df);
        emit(&mut out, 4, text::format_missing(&missing_values))?;

        info!("{}", EdaStage::Charting);
        let charts = ChartSet::build(df, &self.config)?;

        Ok(EdaReport {
            generated_at: Local::now().to_rfc3339(),
            input_file: self.config.input_path.display().to_string(),
            figure_path: None,
            info,
            numeric_summary,
            categorical_summary,
            missing_values,
            charts,
        })
    }
}

/// Write one numbered section, if there is a sink.
fn emit(out: &mut Option<&mut dyn Write>, index: usize, body: String) -> Result<()> {
    if let Some(out) = out.as_deref_mut() {
        write!(out, "{}{}", text::section_header(index, SECTION_TITLES[index - 1]), body)?;
    }
    Ok(())
}
