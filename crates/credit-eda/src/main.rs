//! CLI entry point for the credit risk EDA.

use anyhow::Result;
use clap::Parser;
use credit_eda::config::DEFAULT_INPUT_FILE;
use credit_eda::{EdaConfig, EdaReporter, OutputFormat};
use std::io;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory data analysis of a credit risk dataset",
    long_about = "Prints the dataset overview, descriptive statistics and missing-value \
                  counts of a credit CSV file, then renders a six-panel chart figure.\n\n\
                  EXAMPLES:\n  \
                  # Analyse credit_score_original.csv in the working directory\n  \
                  credit-eda\n\n  \
                  # Another file, figure saved without opening a browser\n  \
                  credit-eda -i data/credit.csv --report out/figure.html --no-show\n\n  \
                  # Machine-readable output\n  \
                  credit-eda --json --no-show | jq .missing_values"
)]
struct Args {
    /// Path to the CSV file to analyse
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input: String,

    /// Where to write the figure page
    ///
    /// If not specified, the page is written to the system temp directory
    #[arg(long)]
    report: Option<String>,

    /// Write the figure page without opening it
    #[arg(long)]
    no_show: bool,

    /// Output the full report as JSON instead of text tables
    ///
    /// Disables all progress logs; only the JSON report is written to stdout.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the reports)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the reports. When `json_output`
/// is true, logging is disabled entirely.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);
    debug!("Arguments: {:?}", args);

    let mut builder = EdaConfig::builder()
        .input_path(&args.input)
        .show_figure(!args.no_show)
        .output_format(if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        });

    if let Some(ref report) = args.report {
        builder = builder.report_path(report);
    }

    let config = builder.build()?;
    let reporter = EdaReporter::new(config)?;

    let stdout = io::stdout();
    let report = reporter.run(&mut stdout.lock())?;

    info!(
        "Analysis complete: {} rows, {} columns, {} missing cells",
        report.info.rows,
        report.info.columns,
        report.total_missing()
    );

    Ok(())
}
