//! Correlation-based selection of numeric candidates.

use polars::prelude::*;
use tracing::debug;

use crate::config::{CorrelationFilter, NumericSelectionConfig};
use crate::error::Result;
use crate::stats;
use crate::types::{NumericAssociation, Typification};

use super::{drop_incomplete_rows, ensure_continuous_target, numeric_values, resolve_typification};

/// Select the numeric columns linearly associated with `target_col`.
///
/// Candidates are the continuous and discrete numeric columns of the
/// typification (computed with default thresholds when not supplied),
/// excluding the target itself. A candidate is kept when its Pearson
/// coefficient against the target passes the configured filter and the
/// two-sided p-value stays at or below the threshold. Rows containing
/// nulls are dropped for the computation; the input frame is not
/// modified.
///
/// Results come back in candidate-pool order, each carrying both
/// statistics.
pub fn select_numeric(
    df: &DataFrame,
    target_col: &str,
    config: &NumericSelectionConfig,
    typification: Option<&Typification>,
) -> Result<Vec<NumericAssociation>> {
    config.validate()?;
    let typification = resolve_typification(df, typification)?;
    ensure_continuous_target(df, &typification, target_col)?;

    let working = drop_incomplete_rows(df)?;
    let target = numeric_values(&working, target_col)?;

    let mut selected = Vec::new();
    for candidate in typification.numeric_candidates() {
        if candidate == target_col {
            continue;
        }
        let values = numeric_values(&working, candidate)?;
        let outcome = stats::pearson(&values, &target);
        let magnitude_ok = match config.correlation_filter {
            CorrelationFilter::Signed => outcome.r >= config.correlation_threshold,
            CorrelationFilter::Absolute => outcome.r.abs() >= config.correlation_threshold,
        };
        if magnitude_ok && outcome.p_value <= config.p_value_threshold {
            selected.push(NumericAssociation {
                column: candidate.to_string(),
                correlation: outcome.r,
                p_value: outcome.p_value,
            });
        }
    }

    debug!(
        "Numeric selection kept {} of {} candidates for target '{}'",
        selected.len(),
        typification.numeric_candidates().len().saturating_sub(1),
        target_col,
    );
    Ok(selected)
}
