//! Feature selection against a continuous numeric regression target.
//!
//! Both selectors share the same preconditions: thresholds in range, a
//! target column classified [`TypeLabel::NumericContinuous`], and enough
//! complete rows once null-bearing rows are dropped. The drop operates
//! on a fresh frame; the caller's dataset is never modified.

mod categorical;
mod numeric;

pub use categorical::select_categorical;
pub use numeric::select_numeric;

use std::borrow::Cow;

use polars::prelude::*;

use crate::config::TypingThresholds;
use crate::error::{AnalysisError, Result};
use crate::profiler::VariableProfiler;
use crate::types::{TypeLabel, Typification};

/// Minimum complete rows either selector needs: the correlation test
/// runs on n - 2 degrees of freedom.
const MIN_COMPLETE_ROWS: usize = 3;

/// Use the supplied typification or compute one with default thresholds.
fn resolve_typification<'a>(
    df: &DataFrame,
    supplied: Option<&'a Typification>,
) -> Result<Cow<'a, Typification>> {
    match supplied {
        Some(typification) => Ok(Cow::Borrowed(typification)),
        None => Ok(Cow::Owned(VariableProfiler::typify(
            df,
            &TypingThresholds::default(),
        )?)),
    }
}

/// Fail unless `target_col` exists and is classified continuous numeric.
fn ensure_continuous_target(
    df: &DataFrame,
    typification: &Typification,
    target_col: &str,
) -> Result<()> {
    if df.column(target_col).is_err() {
        return Err(AnalysisError::ColumnNotFound(target_col.to_string()));
    }
    match typification.label_of(target_col) {
        Some(TypeLabel::NumericContinuous) => Ok(()),
        _ => Err(AnalysisError::TargetNotContinuous {
            column: target_col.to_string(),
        }),
    }
}

/// Drop every row containing a null, leaving the input frame untouched.
fn drop_incomplete_rows(df: &DataFrame) -> Result<DataFrame> {
    let complete = df.clone().lazy().drop_nulls(None).collect()?;
    if complete.height() < MIN_COMPLETE_ROWS {
        return Err(AnalysisError::InsufficientRows {
            required: MIN_COMPLETE_ROWS,
            actual: complete.height(),
        });
    }
    Ok(complete)
}

/// Extract a column as f64 values.
fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>> {
    let series = df
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_incomplete_rows_copies() {
        let df = df!(
            "a" => &[Some(1.0f64), None, Some(3.0), Some(4.0), Some(5.0)],
            "b" => &[Some(1.0f64), Some(2.0), Some(3.0), None, Some(5.0)],
        )
        .unwrap();

        let complete = drop_incomplete_rows(&df).unwrap();
        assert_eq!(complete.height(), 3);
        // Original frame untouched.
        assert_eq!(df.height(), 5);
        assert_eq!(df.column("a").unwrap().null_count(), 1);
    }

    #[test]
    fn test_drop_incomplete_rows_requires_minimum() {
        let df = df!(
            "a" => &[Some(1.0f64), None, None],
            "b" => &[1.0f64, 2.0, 3.0],
        )
        .unwrap();
        let result = drop_incomplete_rows(&df);
        assert!(matches!(
            result,
            Err(AnalysisError::InsufficientRows {
                required: 3,
                actual: 1,
            })
        ));
    }

    #[test]
    fn test_missing_target_column() {
        let df = df!("a" => &[1.0f64, 2.0, 3.0]).unwrap();
        let typification = Typification::default();
        let result = ensure_continuous_target(&df, &typification, "absent");
        assert!(matches!(result, Err(AnalysisError::ColumnNotFound(_))));
    }

    #[test]
    fn test_target_with_wrong_label() {
        let df = df!("a" => &[1.0f64, 2.0, 3.0]).unwrap();
        let mut typification = Typification::default();
        typification.push(TypeLabel::NumericDiscrete, "a");
        let result = ensure_continuous_target(&df, &typification, "a");
        assert!(matches!(
            result,
            Err(AnalysisError::TargetNotContinuous { .. })
        ));
    }
}
