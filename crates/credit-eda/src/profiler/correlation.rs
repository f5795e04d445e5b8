//! Pearson correlation over numeric columns.

use crate::error::{EdaError, Result};
use crate::types::CorrelationMatrix;
use crate::utils::{numeric_column_names, optional_f64_values, require_column};
use polars::prelude::*;

/// Correlation matrix over every numeric column of the frame.
///
/// Each pair uses only the rows where both columns are present. Diagonal
/// entries are exactly 1.0 for columns that vary and undefined otherwise.
pub(crate) fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let columns = numeric_column_names(df);
    if columns.is_empty() {
        return Err(EdaError::NoNumericColumns);
    }

    let data = columns
        .iter()
        .map(|name| optional_f64_values(require_column(df, name)?))
        .collect::<Result<Vec<_>>>()?;

    let n = columns.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(&data[i], &data[j]);
            let r = if i == j { r.map(|_| 1.0) } else { r };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix { columns, values })
}

/// Pearson coefficient over pairwise-complete observations.
///
/// `None` with fewer than two pairs or when either side has zero variance.
pub(crate) fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => Some((*a, *b)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let r = pearson(&some(&[1.0, 2.0, 3.0]), &some(&[2.0, 4.0, 6.0])).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let r = pearson(&some(&[1.0, 2.0, 3.0]), &some(&[3.0, 2.0, 1.0])).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_constant_is_undefined() {
        assert_eq!(pearson(&some(&[1.0, 2.0, 3.0]), &some(&[5.0, 5.0, 5.0])), None);
    }

    #[test]
    fn test_pearson_pairwise_complete() {
        // the third row is skipped for both sides
        let x = vec![Some(1.0), Some(2.0), None, Some(4.0)];
        let y = vec![Some(10.0), Some(20.0), Some(-100.0), Some(40.0)];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_shape_and_symmetry() {
        let df = df!(
            "credit_risk" => &["good", "bad", "good", "bad", "good"],
            "age" => &[25i64, 40, 33, 51, 29],
            "amount" => &[1200.0f64, 5400.0, 2300.0, 8000.0, 1500.0],
            "duration" => &[12i64, 36, 24, 48, 6]
        )
        .unwrap();

        let corr = correlation_matrix(&df).unwrap();
        assert_eq!(corr.dimension(), 3);
        assert_eq!(corr.columns, vec!["age", "amount", "duration"]);

        for i in 0..3 {
            assert_eq!(corr.values[i].len(), 3);
            assert_eq!(corr.values[i][i], Some(1.0));
            for j in 0..3 {
                assert_eq!(corr.values[i][j], corr.values[j][i]);
            }
        }
        assert!(corr.get("age", "amount").unwrap() > 0.9);
    }

    #[test]
    fn test_matrix_requires_numeric_columns() {
        let df = df!("purpose" => &["car", "tv"]).unwrap();
        assert!(matches!(
            correlation_matrix(&df),
            Err(EdaError::NoNumericColumns)
        ));
    }
}
