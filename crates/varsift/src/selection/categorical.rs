//! Group-comparison selection of categorical candidates.

use std::collections::HashMap;

use polars::prelude::*;
use tracing::debug;

use crate::config::CategoricalSelectionConfig;
use crate::error::{AnalysisError, Result};
use crate::stats;
use crate::types::{CategoricalAssociation, Typification};

use super::{drop_incomplete_rows, ensure_continuous_target, numeric_values, resolve_typification};

/// Select the categorical columns whose groups shift the target.
///
/// Candidates are the binary and nominal columns of the typification
/// (computed with default thresholds when not supplied). The target
/// values are partitioned by each candidate's distinct values on the
/// null-dropped working frame; two groups are compared with a two-sided
/// Mann-Whitney U test, three or more with one-way ANOVA. A candidate
/// reduced to fewer than two non-empty groups is a fatal input error,
/// not a silent skip.
///
/// Results come back in candidate-pool order with their p-values.
pub fn select_categorical(
    df: &DataFrame,
    target_col: &str,
    config: &CategoricalSelectionConfig,
    typification: Option<&Typification>,
) -> Result<Vec<CategoricalAssociation>> {
    config.validate()?;
    let typification = resolve_typification(df, typification)?;
    ensure_continuous_target(df, &typification, target_col)?;

    let working = drop_incomplete_rows(df)?;
    let target = numeric_values(&working, target_col)?;

    let mut selected = Vec::new();
    for candidate in typification.categorical_candidates() {
        let groups = group_target_values(&working, candidate, &target)?;
        if groups.len() < 2 {
            return Err(AnalysisError::DegenerateGroups {
                column: candidate.to_string(),
                groups: groups.len(),
            });
        }

        let outcome = if groups.len() == 2 {
            stats::mann_whitney_u(&groups[0], &groups[1])
        } else {
            stats::one_way_anova(&groups)
        };
        debug!(
            "  {}: {} groups, statistic {:.4}, p-value {:.4e}",
            candidate,
            groups.len(),
            outcome.statistic,
            outcome.p_value,
        );
        if outcome.p_value <= config.p_value_threshold {
            selected.push(CategoricalAssociation {
                column: candidate.to_string(),
                p_value: outcome.p_value,
            });
        }
    }

    debug!(
        "Categorical selection kept {} of {} candidates for target '{}'",
        selected.len(),
        typification.categorical_candidates().len(),
        target_col,
    );
    Ok(selected)
}

/// Partition target values by the candidate's distinct values.
///
/// Groups are ordered by first appearance in the working frame.
fn group_target_values(df: &DataFrame, candidate: &str, target: &[f64]) -> Result<Vec<Vec<f64>>> {
    let series = df
        .column(candidate)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let keys = series.str()?;

    let mut slot_of: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<f64>> = Vec::new();
    for (key, value) in keys.into_iter().zip(target.iter()) {
        let Some(key) = key else { continue };
        let slot = *slot_of.entry(key.to_string()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(*value);
    }
    Ok(groups)
}
