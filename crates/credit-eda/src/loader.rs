//! CSV loading.
//!
//! The dataset is read once, with a header row and a schema inferred from
//! every row, so a late float or text cell widens its column instead of
//! failing the parse. Cells matching the usual missing-value markers are read as
//! null so the missing-value report counts them.

use crate::error::{EdaError, Result, ResultExt};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions, NullValues};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Cell contents treated as missing, in addition to empty fields.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn read_options() -> CsvReadOptions {
    let null_values = NullValues::AllColumns(MISSING_MARKERS.iter().map(|m| (*m).into()).collect());

    CsvReadOptions::default()
        .with_infer_schema_length(None)
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(Some(b'"'))
                .with_missing_is_null(true)
                .with_null_values(Some(null_values)),
        )
}

/// Load a CSV file into a `DataFrame`.
///
/// Fails with [`EdaError::FileNotFound`] when the path does not exist and
/// with a polars error when the content cannot be parsed.
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(EdaError::FileNotFound(path.to_path_buf()));
    }

    info!("Loading dataset from: {}", path.display());
    let df = read_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .context(format!("Opening {}", path.display()))?
        .finish()
        .context(format!("Parsing {}", path.display()))?;

    info!("Dataset loaded successfully: {:?}", df.shape());
    debug!("Schema: {:?}", df.schema());
    Ok(df)
}

/// Load CSV content held in memory.
pub fn load_csv_from_str(content: &str) -> Result<DataFrame> {
    let cursor = Cursor::new(content.as_bytes().to_vec());
    read_options()
        .into_reader_with_file_handle(cursor)
        .finish()
        .context("Parsing in-memory CSV")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_load_missing_file() {
        let err = load_csv("definitely/not/here.csv").unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "credit_risk,age,purpose").unwrap();
        writeln!(file, "good,35,car").unwrap();
        writeln!(file, "bad,22,furniture").unwrap();
        file.flush().unwrap();

        let df = load_csv(file.path()).unwrap();
        assert_eq!(df.shape(), (2, 3));
        assert_eq!(df.column("age").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("purpose").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_missing_markers_become_null() {
        let df = load_csv_from_str("age,purpose\n30,car\n,NA\nNaN,\n41,business\n").unwrap();

        assert_eq!(df.column("age").unwrap().null_count(), 2);
        assert_eq!(df.column("purpose").unwrap().null_count(), 2);
        assert!(crate::utils::is_numeric_dtype(df.column("age").unwrap().dtype()));
    }

    #[test]
    fn test_late_float_widens_integer_column() {
        let mut content = String::from("credit_risk,amount\n");
        for i in 0..150 {
            content.push_str(&format!("good,{}\n", 1000 + i));
        }
        content.push_str("bad,1234.5\n");

        let df = load_csv_from_str(&content).unwrap();
        let amount = df.column("amount").unwrap();
        assert_eq!(amount.dtype(), &DataType::Float64);
        assert_eq!(amount.len(), 151);
        assert_eq!(amount.null_count(), 0);
        assert_eq!(amount.as_materialized_series().f64().unwrap().get(150), Some(1234.5));
    }

    #[test]
    fn test_late_text_cell_makes_column_categorical() {
        let mut content = String::from("purpose\n");
        for i in 0..120 {
            content.push_str(&format!("{}\n", i));
        }
        content.push_str("car\n");

        let df = load_csv_from_str(&content).unwrap();
        assert_eq!(df.column("purpose").unwrap().dtype(), &DataType::String);
    }
}
