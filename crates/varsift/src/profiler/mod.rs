//! Column profiling and typification.
//!
//! [`VariableProfiler::describe`] computes per-column descriptive
//! statistics (dtype category, null share, cardinality) and assigns each
//! column a [`TypeLabel`] via the cardinality heuristic;
//! [`VariableProfiler::typify`] inverts those labels into ordered
//! per-label column lists.

mod classification;

use polars::prelude::*;
use tracing::debug;

use crate::config::TypingThresholds;
use crate::error::{AnalysisError, Result};
use crate::types::{ColumnProfile, Typification};
use crate::utils::dtype_kind;

use classification::classify_column;

/// Profiles dataset columns and groups them by suggested statistical type.
pub struct VariableProfiler;

impl VariableProfiler {
    /// Build a profile for every column of the frame.
    ///
    /// Profiles come back in column order. The thresholds are validated
    /// first and an empty frame is rejected outright; a summary of the
    /// classification parameters is emitted at debug level.
    pub fn describe(df: &DataFrame, thresholds: &TypingThresholds) -> Result<Vec<ColumnProfile>> {
        thresholds.validate()?;
        if df.height() == 0 || df.width() == 0 {
            return Err(AnalysisError::EmptyDataset);
        }

        debug!(
            "Classifying {} columns over {} rows (nominal cardinality <= {}, continuous ratio > {})",
            df.width(),
            df.height(),
            thresholds.nominal_cardinality,
            thresholds.continuous_ratio,
        );

        let row_count = df.height();
        let mut profiles = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let series = column.as_materialized_series();
            profiles.push(Self::profile_column(series, row_count, thresholds)?);
        }
        Ok(profiles)
    }

    /// Group column names by their suggested type.
    ///
    /// The five lists partition the column set; each preserves original
    /// column order.
    pub fn typify(df: &DataFrame, thresholds: &TypingThresholds) -> Result<Typification> {
        let mut typification = Typification::default();
        for profile in Self::describe(df, thresholds)? {
            typification.push(profile.label, profile.name);
        }
        Ok(typification)
    }

    fn profile_column(
        series: &Series,
        row_count: usize,
        thresholds: &TypingThresholds,
    ) -> Result<ColumnProfile> {
        let null_count = series.null_count();
        // Distinct count over non-null values only; a null entry would
        // otherwise count as its own distinct value.
        let cardinality = series.drop_nulls().n_unique()?;
        let kind = dtype_kind(series.dtype());
        let label = classify_column(cardinality, row_count, kind, thresholds);

        Ok(ColumnProfile {
            name: series.name().to_string(),
            dtype: format!("{:?}", series.dtype()),
            dtype_kind: kind,
            null_count,
            null_percentage: null_count as f64 / row_count as f64 * 100.0,
            cardinality,
            cardinality_percentage: cardinality as f64 / row_count as f64 * 100.0,
            label,
        })
    }
}
