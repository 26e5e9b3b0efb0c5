//! Typed errors for classification and selection.
//!
//! Every contract violation surfaces as a distinct [`AnalysisError`]
//! variant; nothing is masked behind sentinel values or log output.
//! Errors serialize as `{ code, message }` objects so downstream
//! consumers (e.g. a rendering layer) can branch on the kind.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The error type for typing and selection operations.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A fractional threshold fell outside its valid domain.
    #[error("Invalid value for '{param}': {value} (must be between 0 and 1)")]
    InvalidThreshold { param: &'static str, value: f64 },

    /// The nominal cardinality threshold must be at least 1.
    #[error("Invalid nominal cardinality threshold: {0} (must be at least 1)")]
    InvalidCardinalityThreshold(usize),

    /// The requested target cannot anchor a regression selection.
    #[error(
        "Column '{column}' must be classified as continuous numeric to serve as the regression target"
    )]
    TargetNotContinuous { column: String },

    /// A categorical candidate produced too few groups to compare.
    #[error(
        "Column '{column}' yields {groups} non-empty group(s) after dropping incomplete rows; at least 2 are required for a group comparison"
    )]
    DegenerateGroups { column: String, groups: usize },

    /// The dataset has no rows or no columns.
    #[error("Dataset has no rows or no columns")]
    EmptyDataset,

    /// Too few complete rows remain for a statistical test.
    #[error("Need at least {required} complete rows after dropping nulls, found {actual}")]
    InsufficientRows { required: usize, actual: usize },

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl AnalysisError {
    /// Get a stable error code for downstream handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::InvalidThreshold { .. } => "INVALID_THRESHOLD",
            Self::InvalidCardinalityThreshold(_) => "INVALID_CARDINALITY_THRESHOLD",
            Self::TargetNotContinuous { .. } => "TARGET_NOT_CONTINUOUS",
            Self::DegenerateGroups { .. } => "DEGENERATE_GROUPS",
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::InsufficientRows { .. } => "INSUFFICIENT_ROWS",
            Self::Polars(_) => "POLARS_ERROR",
        }
    }
}

/// Errors serialize as a struct with `code` and `message` fields.
impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AnalysisError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for typing and selection operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            AnalysisError::ColumnNotFound("price".to_string()).error_code(),
            "COLUMN_NOT_FOUND"
        );
        assert_eq!(
            AnalysisError::InvalidThreshold {
                param: "p_value_threshold",
                value: 1.5,
            }
            .error_code(),
            "INVALID_THRESHOLD"
        );
        assert_eq!(AnalysisError::EmptyDataset.error_code(), "EMPTY_DATASET");
    }

    #[test]
    fn test_error_serialization() {
        let error = AnalysisError::ColumnNotFound("Age".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("COLUMN_NOT_FOUND"));
        assert!(json.contains("Age"));
    }

    #[test]
    fn test_degenerate_groups_message() {
        let error = AnalysisError::DegenerateGroups {
            column: "status".to_string(),
            groups: 1,
        };
        let message = error.to_string();
        assert!(message.contains("status"));
        assert!(message.contains("1 non-empty group"));
    }
}
