//! One plotly plot per figure panel.

use crate::charts::{BoxGroup, DistributionChart};
use crate::types::{CorrelationMatrix, ValueCount};
use crate::utils::format_float;
use plotly::color::Rgb;
use plotly::common::{
    ColorScale, ColorScalePalette, Line, Marker, Mode, Orientation, TextPosition, Title,
};
use plotly::layout::{Annotation, Axis};
use plotly::{Bar, BoxPlot, HeatMap, Layout, Plot, Scatter};

const PANEL_HEIGHT: usize = 420;

fn target_color() -> Rgb {
    Rgb::new(68, 1, 84)
}

fn purpose_color() -> Rgb {
    Rgb::new(174, 198, 232)
}

fn density_color() -> Rgb {
    Rgb::new(40, 40, 40)
}

fn panel_layout(title: &str, x_title: &str, y_title: &str) -> Layout {
    Layout::new()
        .title(Title::new(title))
        .height(PANEL_HEIGHT)
        .show_legend(false)
        .x_axis(Axis::new().title(Title::new(x_title)))
        .y_axis(Axis::new().title(Title::new(y_title)))
}

/// Bar chart of class counts with the count printed above each bar.
pub(crate) fn target_distribution(title: &str, column: &str, counts: &[ValueCount]) -> Plot {
    let labels: Vec<String> = counts.iter().map(|vc| vc.value.clone()).collect();
    let values: Vec<usize> = counts.iter().map(|vc| vc.count).collect();
    let text: Vec<String> = values.iter().map(|c| c.to_string()).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(labels, values)
            .name(column)
            .text_array(text)
            .text_position(TextPosition::Outside)
            .marker(Marker::new().color(target_color())),
    );
    plot.set_layout(panel_layout(title, column, "count"));
    plot
}

/// Histogram bars with the density curve drawn over them.
pub(crate) fn distribution(title: &str, chart: &DistributionChart, color: Rgb) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(chart.histogram.centers(), chart.histogram.counts.clone())
            .name("count")
            .marker(Marker::new().color(color)),
    );
    if let Some(density) = &chart.density {
        plot.add_trace(
            Scatter::new(density.xs.clone(), density.ys.clone())
                .mode(Mode::Lines)
                .name("density")
                .line(Line::new().color(density_color()).width(2.0)),
        );
    }
    plot.set_layout(panel_layout(title, chart.column.as_str(), "count"));
    plot
}

/// One vertical box per target class, drawn from the precomputed Tukey
/// statistics so the plot matches the reported quartiles.
///
/// Values beyond the whiskers are overlaid as markers.
pub(crate) fn grouped_boxes(title: &str, group_col: &str, value_col: &str, groups: &[BoxGroup]) -> Plot {
    let mut plot = Plot::new();
    for group in groups {
        let Some(stats) = &group.stats else { continue };
        let label = group.group.clone();

        plot.add_trace(
            BoxPlot::<String, f64>::default()
                .x(vec![label.clone()])
                .q1(vec![stats.q1])
                .median(vec![stats.median])
                .q3(vec![stats.q3])
                .lower_fence(vec![stats.lower_whisker])
                .upper_fence(vec![stats.upper_whisker])
                .name(label.as_str())
                .marker(Marker::new().color(target_color())),
        );
        if !stats.outliers.is_empty() {
            plot.add_trace(
                Scatter::new(vec![label.clone(); stats.outliers.len()], stats.outliers.clone())
                    .mode(Mode::Markers)
                    .name(label.as_str())
                    .marker(Marker::new().color(target_color())),
            );
        }
    }
    plot.set_layout(panel_layout(title, group_col, value_col));
    plot
}

/// Horizontal bars, most frequent value on top.
pub(crate) fn top_categories(title: &str, column: &str, counts: &[ValueCount]) -> Plot {
    // plotly stacks horizontal categories bottom-up
    let labels: Vec<String> = counts.iter().rev().map(|vc| vc.value.clone()).collect();
    let values: Vec<usize> = counts.iter().rev().map(|vc| vc.count).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(values, labels)
            .name(column)
            .orientation(Orientation::Horizontal)
            .marker(Marker::new().color(purpose_color())),
    );
    plot.set_layout(panel_layout(title, "count", column));
    plot
}

/// Annotated heatmap, first column in the top-left corner.
pub(crate) fn correlation_heatmap(title: &str, matrix: &CorrelationMatrix) -> Plot {
    let x = matrix.columns.clone();
    let y: Vec<String> = matrix.columns.iter().rev().cloned().collect();
    let z: Vec<Vec<Option<f64>>> = matrix.values.iter().rev().cloned().collect();

    let annotations: Vec<Annotation> = matrix
        .columns
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            matrix.columns.iter().enumerate().map(move |(j, col)| {
                Annotation::new()
                    .x(col.clone())
                    .y(row.clone())
                    .text(format_float(matrix.values[i][j], 2).as_str())
                    .show_arrow(false)
            })
        })
        .collect();

    let mut plot = Plot::new();
    plot.add_trace(
        HeatMap::new(x, y, z)
            .color_scale(ColorScale::Palette(ColorScalePalette::RdBu))
            .reverse_scale(true),
    );
    plot.set_layout(
        Layout::new()
            .title(Title::new(title))
            .height(PANEL_HEIGHT)
            .annotations(annotations),
    );
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::BoxStats;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn vc(value: &str, count: usize) -> ValueCount {
        ValueCount {
            value: value.to_string(),
            count,
        }
    }

    fn plot_json(plot: &Plot) -> Value {
        serde_json::from_str(&plot.to_json()).unwrap()
    }

    #[test]
    fn test_target_bars_carry_count_labels() {
        let plot = target_distribution("Target", "credit_risk", &[vc("good", 7), vc("bad", 3)]);
        let json = plot_json(&plot);
        let bar = &json["data"][0];

        assert_eq!(bar["x"], serde_json::json!(["good", "bad"]));
        assert_eq!(bar["y"], serde_json::json!([7, 3]));
        assert_eq!(bar["text"], serde_json::json!(["7", "3"]));
        assert_eq!(bar["textposition"], "outside");
    }

    #[test]
    fn test_top_categories_most_frequent_on_top() {
        let counts = [
            vc("car", 3),
            vc("radio/TV", 2),
            vc("furniture", 2),
            vc("business", 1),
            vc("education", 1),
        ];
        let json = plot_json(&top_categories("Top", "purpose", &counts));
        let bar = &json["data"][0];

        assert_eq!(bar["orientation"], "h");
        assert_eq!(
            bar["y"],
            serde_json::json!(["education", "business", "furniture", "radio/TV", "car"])
        );
        assert_eq!(bar["x"], serde_json::json!([1, 1, 2, 2, 3]));
        assert_eq!(bar["y"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_heatmap_annotations_use_two_decimals() {
        let matrix = CorrelationMatrix {
            columns: vec!["age".to_string(), "amount".to_string()],
            values: vec![vec![Some(1.0), Some(0.3333)], vec![Some(0.3333), Some(1.0)]],
        };
        let json = plot_json(&correlation_heatmap("Correlation", &matrix));

        let annotations = json["layout"]["annotations"].as_array().unwrap();
        assert_eq!(annotations.len(), 4);
        let diagonal: Vec<&Value> = annotations
            .iter()
            .filter(|a| a["x"] == a["y"])
            .map(|a| &a["text"])
            .collect();
        assert_eq!(diagonal, vec!["1.00", "1.00"]);
        let off_diagonal = annotations
            .iter()
            .find(|a| a["x"] == "amount" && a["y"] == "age")
            .unwrap();
        assert_eq!(off_diagonal["text"], "0.33");

        let heatmap = &json["data"][0];
        assert_eq!(heatmap["y"], serde_json::json!(["amount", "age"]));
    }

    #[test]
    fn test_boxes_drawn_from_box_stats() {
        let stats = BoxStats::compute(&[6.0, 12.0, 12.0, 18.0, 24.0, 24.0, 72.0]).unwrap();
        let groups = [
            BoxGroup {
                group: "good".to_string(),
                values: Vec::new(),
                stats: Some(stats),
            },
            BoxGroup {
                group: "bad".to_string(),
                values: Vec::new(),
                stats: None,
            },
        ];
        let json = plot_json(&grouped_boxes("Duration", "credit_risk", "duration", &groups));
        let traces = json["data"].as_array().unwrap();

        assert_eq!(traces.len(), 2);
        let bx = &traces[0];
        assert_eq!(bx["type"], "box");
        assert_eq!(bx["x"], serde_json::json!(["good"]));
        assert_eq!(bx["q1"], serde_json::json!([12.0]));
        assert_eq!(bx["median"], serde_json::json!([18.0]));
        assert_eq!(bx["q3"], serde_json::json!([24.0]));
        assert_eq!(bx["lowerfence"], serde_json::json!([6.0]));
        assert_eq!(bx["upperfence"], serde_json::json!([24.0]));
        assert_eq!(traces[1]["y"], serde_json::json!([72.0]));
    }
}
