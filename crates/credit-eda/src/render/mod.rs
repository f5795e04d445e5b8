//! Figure rendering and display.
//!
//! The six panels are drawn as plotly plots and laid out in a 3x2 grid on a
//! single HTML page. Displaying the figure means writing that page and
//! handing it to the system's default viewer.
//!
//! # Example
//!
//! ```rust,ignore
//! use credit_eda::render::Figure;
//!
//! let figure = Figure::from_report(&report, &config);
//! let path = figure.write(&config.resolved_report_path())?;
//! Figure::display(&path)?;
//! ```

mod panels;

use crate::charts::ChartSet;
use crate::config::EdaConfig;
use crate::error::{EdaError, Result};
use crate::reporting::EdaReport;
use chrono::Local;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use plotly::Plot;
use plotly::color::Rgb;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

const PAGE_CSS: &str = "
    body { font-family: Arial, sans-serif; margin: 24px; background: #fafafa; }
    h1 { text-align: center; font-size: 28px; margin-bottom: 4px; }
    .meta { text-align: center; color: #666; margin-top: 0; }
    .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
    .panel { background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1); }
";

/// One cell of the grid.
pub struct Panel {
    pub title: String,
    pub plot: Plot,
}

fn panel(title: String, draw: impl FnOnce(&str) -> Plot) -> Panel {
    let plot = draw(&title);
    Panel { title, plot }
}

/// The assembled six-panel figure.
pub struct Figure {
    title: String,
    source: String,
    generated_at: String,
    panels: Vec<Panel>,
}

impl Figure {
    /// Draw every panel of the chart set, in grid order (row-major).
    pub fn from_charts(charts: &ChartSet, title: &str, source: &str) -> Self {
        let target = charts.target_column.as_str();

        let panels = vec![
            panel(format!("Distribution of {} (target variable)", target), |title| {
                panels::target_distribution(title, target, &charts.target_distribution)
            }),
            panel(format!("{} distribution", charts.age.column), |title| {
                panels::distribution(title, &charts.age, Rgb::new(135, 206, 235))
            }),
            panel(format!("{} distribution", charts.amount.column), |title| {
                panels::distribution(title, &charts.amount, Rgb::new(250, 128, 114))
            }),
            panel(format!("{} vs {}", charts.duration_column, target), |title| {
                panels::grouped_boxes(
                    title,
                    target,
                    &charts.duration_column,
                    &charts.duration_by_target,
                )
            }),
            panel(
                format!("Top {} {} values", charts.top_purposes.len(), charts.purpose_column),
                |title| panels::top_categories(title, &charts.purpose_column, &charts.top_purposes),
            ),
            panel("Correlation matrix of numeric columns".to_string(), |title| {
                panels::correlation_heatmap(title, &charts.correlation)
            }),
        ];

        Self {
            title: title.to_string(),
            source: source.to_string(),
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            panels,
        }
    }

    /// Figure for a finished report, titled from the configuration.
    pub fn from_report(report: &EdaReport, config: &EdaConfig) -> Self {
        Self::from_charts(&report.charts, &config.figure_title, &report.input_file)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_JS) {}
                    style { (PreEscaped(PAGE_CSS)) }
                }
                body {
                    h1 { (self.title) }
                    p.meta { "Source: " (self.source) " | Generated " (self.generated_at) }
                    div.grid {
                        @for (idx, panel) in self.panels.iter().enumerate() {
                            @let div_id = format!("panel-{}", idx + 1);
                            div.panel title=(panel.title) {
                                (PreEscaped(panel.plot.to_inline_html(Some(div_id.as_str()))))
                            }
                        }
                    }
                }
            }
        }
    }

    /// The complete page as a string.
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    /// Write the page to `path`, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_html())?;
        info!("Figure written to: {}", path.display());
        Ok(path.to_path_buf())
    }

    /// Open a written page in the default viewer.
    pub fn display(path: &Path) -> Result<()> {
        debug!("Opening {}", path.display());
        open::that(path).map_err(|e| EdaError::DisplayFailed(format!("{}: {}", path.display(), e)))
    }
}
