use serde::{Deserialize, Serialize};

use crate::utils::DtypeKind;

/// Statistical type suggested for a column by the cardinality heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeLabel {
    /// Exactly two distinct non-null values.
    CategoricalBinary,
    /// Distinct-value count at or below the nominal cardinality threshold.
    CategoricalNominal,
    /// Numeric or datetime column whose cardinality-to-row-count ratio
    /// stays at or below the continuous ratio threshold.
    NumericDiscrete,
    /// Numeric or datetime column with a high cardinality-to-row-count ratio.
    NumericContinuous,
    /// High-cardinality non-numeric column (identifiers, free text).
    LowInterest,
}

impl TypeLabel {
    /// Get a human-readable display name for the label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CategoricalBinary => "Categorical (binary)",
            Self::CategoricalNominal => "Categorical (nominal)",
            Self::NumericDiscrete => "Numeric (discrete)",
            Self::NumericContinuous => "Numeric (continuous)",
            Self::LowInterest => "Low interest",
        }
    }

    /// Whether the label marks a numeric variable.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::NumericDiscrete | Self::NumericContinuous)
    }

    /// Whether the label marks a categorical variable.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::CategoricalBinary | Self::CategoricalNominal)
    }
}

/// Descriptive statistics and suggested type for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Display form of the polars dtype, e.g. `Float64`.
    pub dtype: String,
    pub dtype_kind: DtypeKind,
    pub null_count: usize,
    pub null_percentage: f64,
    /// Count of distinct non-null values.
    pub cardinality: usize,
    /// Cardinality relative to the full row count, as a percentage.
    pub cardinality_percentage: f64,
    pub label: TypeLabel,
}

/// Partition of a dataset's columns into the five type labels.
///
/// Each list preserves the original column order. Every column of the
/// profiled dataset appears in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Typification {
    pub binary: Vec<String>,
    pub nominal: Vec<String>,
    pub discrete: Vec<String>,
    pub continuous: Vec<String>,
    pub low_interest: Vec<String>,
}

impl Typification {
    /// Append a column name to the list for `label`.
    pub fn push(&mut self, label: TypeLabel, column: impl Into<String>) {
        self.list_mut(label).push(column.into());
    }

    /// Columns assigned to `label`, in original column order.
    pub fn columns_for(&self, label: TypeLabel) -> &[String] {
        match label {
            TypeLabel::CategoricalBinary => &self.binary,
            TypeLabel::CategoricalNominal => &self.nominal,
            TypeLabel::NumericDiscrete => &self.discrete,
            TypeLabel::NumericContinuous => &self.continuous,
            TypeLabel::LowInterest => &self.low_interest,
        }
    }

    /// Find the label a column was assigned to, if any.
    pub fn label_of(&self, column: &str) -> Option<TypeLabel> {
        const LABELS: [TypeLabel; 5] = [
            TypeLabel::CategoricalBinary,
            TypeLabel::CategoricalNominal,
            TypeLabel::NumericDiscrete,
            TypeLabel::NumericContinuous,
            TypeLabel::LowInterest,
        ];
        LABELS
            .into_iter()
            .find(|label| self.columns_for(*label).iter().any(|c| c == column))
    }

    /// Candidate pool for numeric selection: continuous columns followed
    /// by discrete ones.
    pub fn numeric_candidates(&self) -> Vec<&str> {
        self.continuous
            .iter()
            .chain(self.discrete.iter())
            .map(String::as_str)
            .collect()
    }

    /// Candidate pool for categorical selection: binary columns followed
    /// by nominal ones.
    pub fn categorical_candidates(&self) -> Vec<&str> {
        self.binary
            .iter()
            .chain(self.nominal.iter())
            .map(String::as_str)
            .collect()
    }

    /// Total number of columns across all five lists.
    pub fn len(&self) -> usize {
        self.binary.len()
            + self.nominal.len()
            + self.discrete.len()
            + self.continuous.len()
            + self.low_interest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn list_mut(&mut self, label: TypeLabel) -> &mut Vec<String> {
        match label {
            TypeLabel::CategoricalBinary => &mut self.binary,
            TypeLabel::CategoricalNominal => &mut self.nominal,
            TypeLabel::NumericDiscrete => &mut self.discrete,
            TypeLabel::NumericContinuous => &mut self.continuous,
            TypeLabel::LowInterest => &mut self.low_interest,
        }
    }
}

/// A numeric candidate kept by the correlation filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericAssociation {
    pub column: String,
    /// Pearson correlation coefficient against the target.
    pub correlation: f64,
    /// Two-sided p-value of the correlation test.
    pub p_value: f64,
}

/// A categorical candidate kept by the group-comparison filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalAssociation {
    pub column: String,
    /// p-value of the Mann-Whitney U or one-way ANOVA test.
    pub p_value: f64,
}
