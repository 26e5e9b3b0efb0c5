//! Cardinality heuristic assigning a statistical type to a column.

use crate::config::TypingThresholds;
use crate::types::TypeLabel;
use crate::utils::DtypeKind;

/// Assign a type label from a column's cardinality and dtype category.
///
/// Rules are tried in priority order; the first match wins:
///
/// 1. exactly 2 distinct values -> binary categorical;
/// 2. cardinality at or below the nominal threshold -> nominal
///    categorical (the boundary is inclusive);
/// 3. numeric or datetime dtype -> discrete when the cardinality ratio
///    stays at or below the continuous threshold, continuous otherwise;
/// 4. anything else -> low interest.
///
/// `row_count` must be non-zero; the profiler rejects empty frames
/// before calling in.
pub(crate) fn classify_column(
    cardinality: usize,
    row_count: usize,
    dtype_kind: DtypeKind,
    thresholds: &TypingThresholds,
) -> TypeLabel {
    if cardinality == 2 {
        return TypeLabel::CategoricalBinary;
    }
    if cardinality <= thresholds.nominal_cardinality {
        return TypeLabel::CategoricalNominal;
    }
    if matches!(dtype_kind, DtypeKind::Numeric | DtypeKind::Datetime) {
        let ratio = cardinality as f64 / row_count as f64;
        if ratio <= thresholds.continuous_ratio {
            TypeLabel::NumericDiscrete
        } else {
            TypeLabel::NumericContinuous
        }
    } else {
        TypeLabel::LowInterest
    }
}
