//! Plain-text rendering of the printed reports.
//!
//! Layouts mirror what analysts expect from a dataframe library: `info`
//! prints one row per column, `describe` prints one column per dataset
//! column with the statistics as rows.

use crate::types::{CategoricalSummary, DatasetInfo, MissingCount, NumericSummary};
use crate::utils::{format_bytes, format_float};

/// Decimals used by the numeric describe table.
pub const DESCRIBE_DECIMALS: usize = 6;

/// Header line printed above each report.
pub fn section_header(index: usize, title: &str) -> String {
    format!("\n--- {}. {} ---\n", index, title)
}

/// Right-aligned table with a left label column.
///
/// `cells[row][col]` holds the rendered value for `row_labels[row]` under
/// `headers[col]`.
fn render_table(row_labels: &[&str], headers: &[String], cells: &[Vec<String>]) -> String {
    let label_width = row_labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width));
    for (header, width) in headers.iter().zip(&widths) {
        out.push_str(&format!("  {:>width$}", header, width = width));
    }
    out.push('\n');

    for (label, row) in row_labels.iter().zip(cells) {
        out.push_str(&format!("{:<width$}", label, width = label_width));
        for (cell, width) in row.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$}", cell, width = width));
        }
        out.push('\n');
    }
    out
}

/// Shape, per-column dtypes and non-null counts.
pub fn format_info(info: &DatasetInfo) -> String {
    let mut out = String::new();
    if info.rows == 0 {
        out.push_str("RangeIndex: 0 entries\n");
    } else {
        out.push_str(&format!(
            "RangeIndex: {} entries, 0 to {}\n",
            info.rows,
            info.rows - 1
        ));
    }
    out.push_str(&format!(
        "Data columns (total {} columns):\n",
        info.columns
    ));

    let idx_width = info.columns.saturating_sub(1).to_string().len().max(3);
    let name_width = info
        .column_info
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max("Column".len());
    let count_cells: Vec<String> = info
        .column_info
        .iter()
        .map(|c| format!("{} non-null", c.non_null_count))
        .collect();
    let count_width = count_cells
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("Non-Null Count".len());

    out.push_str(&format!(
        " {:<iw$}  {:<nw$}  {:<cw$}  Dtype\n",
        "#",
        "Column",
        "Non-Null Count",
        iw = idx_width,
        nw = name_width,
        cw = count_width
    ));
    out.push_str(&format!(
        " {:<iw$}  {:<nw$}  {:<cw$}  -----\n",
        "---",
        "------",
        "--------------",
        iw = idx_width,
        nw = name_width,
        cw = count_width
    ));
    for (idx, (column, count)) in info.column_info.iter().zip(&count_cells).enumerate() {
        out.push_str(&format!(
            " {:<iw$}  {:<nw$}  {:<cw$}  {}\n",
            idx,
            column.name,
            count,
            column.dtype,
            iw = idx_width,
            nw = name_width,
            cw = count_width
        ));
    }

    let dtypes: Vec<String> = info
        .dtype_counts
        .iter()
        .map(|(dtype, count)| format!("{}({})", dtype, count))
        .collect();
    out.push_str(&format!("dtypes: {}\n", dtypes.join(", ")));
    out.push_str(&format!(
        "memory usage: {}\n",
        format_bytes(info.memory_usage_bytes)
    ));
    out
}

/// Numeric describe table: count, mean, std, min, quartiles, max.
pub fn format_numeric(summaries: &[NumericSummary]) -> String {
    if summaries.is_empty() {
        return "No numeric columns to describe.\n".to_string();
    }

    let headers: Vec<String> = summaries.iter().map(|s| s.column.clone()).collect();
    let rows: [(&str, fn(&NumericSummary) -> Option<f64>); 8] = [
        ("count", |s| Some(s.count as f64)),
        ("mean", |s| s.mean),
        ("std", |s| s.std),
        ("min", |s| s.min),
        ("25%", |s| s.q25),
        ("50%", |s| s.q50),
        ("75%", |s| s.q75),
        ("max", |s| s.max),
    ];

    let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|(_, stat)| {
            summaries
                .iter()
                .map(|s| format_float(stat(s), DESCRIBE_DECIMALS))
                .collect()
        })
        .collect();

    render_table(&labels, &headers, &cells)
}

/// Categorical describe table: count, unique, top, freq.
pub fn format_categorical(summaries: &[CategoricalSummary]) -> String {
    if summaries.is_empty() {
        return "No categorical columns to describe.\n".to_string();
    }

    let headers: Vec<String> = summaries.iter().map(|s| s.column.clone()).collect();
    let cells: Vec<Vec<String>> = vec![
        summaries.iter().map(|s| s.count.to_string()).collect(),
        summaries.iter().map(|s| s.unique.to_string()).collect(),
        summaries
            .iter()
            .map(|s| s.top.clone().unwrap_or_else(|| "NaN".to_string()))
            .collect(),
        summaries.iter().map(|s| s.freq.to_string()).collect(),
    ];

    render_table(&["count", "unique", "top", "freq"], &headers, &cells)
}

/// Missing cells per column, one line each.
pub fn format_missing(missing: &[MissingCount]) -> String {
    let name_width = missing.iter().map(|m| m.column.len()).max().unwrap_or(0);
    let count_width = missing
        .iter()
        .map(|m| m.missing.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for m in missing {
        out.push_str(&format!(
            "{:<nw$}    {:>cw$}\n",
            m.column,
            m.missing,
            nw = name_width,
            cw = count_width
        ));
    }
    out.push_str("dtype: int64\n");
    out
}
