//! Shared dtype helpers.
//!
//! The classification heuristic only cares about a coarse category of a
//! column's data type, not the exact width or time unit.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Coarse category of a polars data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtypeKind {
    /// Integer or floating point numbers
    Numeric,
    /// Date, datetime or time types
    Datetime,
    /// Boolean type
    Boolean,
    /// String or categorical text
    String,
    /// Other/unknown types
    Other,
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a datetime type.
#[inline]
pub fn is_datetime_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time
    )
}

/// Check if a DataType is boolean.
#[inline]
pub fn is_boolean_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Boolean)
}

/// Get the coarse category of a DataType.
pub fn dtype_kind(dtype: &DataType) -> DtypeKind {
    if is_numeric_dtype(dtype) {
        DtypeKind::Numeric
    } else if is_datetime_dtype(dtype) {
        DtypeKind::Datetime
    } else if is_boolean_dtype(dtype) {
        DtypeKind::Boolean
    } else if matches!(dtype, DataType::String | DataType::Categorical(_, _)) {
        DtypeKind::String
    } else {
        DtypeKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_dtypes() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::UInt8));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_datetime_dtypes() {
        assert!(is_datetime_dtype(&DataType::Date));
        assert!(is_datetime_dtype(&DataType::Time));
        assert!(is_datetime_dtype(&DataType::Datetime(
            TimeUnit::Milliseconds,
            None
        )));
        assert!(!is_datetime_dtype(&DataType::Int64));
    }

    #[test]
    fn test_dtype_kind_categories() {
        assert_eq!(dtype_kind(&DataType::Float32), DtypeKind::Numeric);
        assert_eq!(dtype_kind(&DataType::Date), DtypeKind::Datetime);
        assert_eq!(dtype_kind(&DataType::Boolean), DtypeKind::Boolean);
        assert_eq!(dtype_kind(&DataType::String), DtypeKind::String);
        assert_eq!(
            dtype_kind(&DataType::List(Box::new(DataType::Int32))),
            DtypeKind::Other
        );
    }
}
