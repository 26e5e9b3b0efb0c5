//! Threshold configuration for typing and selection.
//!
//! All thresholds are plain fields with documented defaults; `validate`
//! rejects out-of-range values with typed errors before any computation
//! runs.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Cardinality thresholds driving the type classification heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypingThresholds {
    /// Maximum distinct-value count for a column to be considered a
    /// nominal categorical (inclusive). Default: 10
    pub nominal_cardinality: usize,

    /// Maximum cardinality-to-row-count ratio for a numeric or datetime
    /// column to be considered discrete rather than continuous
    /// (inclusive, 0.0 - 1.0). Default: 0.1
    pub continuous_ratio: f64,
}

impl Default for TypingThresholds {
    fn default() -> Self {
        Self {
            nominal_cardinality: 10,
            continuous_ratio: 0.1,
        }
    }
}

impl TypingThresholds {
    /// Create validated thresholds.
    pub fn new(nominal_cardinality: usize, continuous_ratio: f64) -> Result<Self> {
        let thresholds = Self {
            nominal_cardinality,
            continuous_ratio,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Validate the thresholds and return an error if out of range.
    pub fn validate(&self) -> Result<()> {
        if self.nominal_cardinality == 0 {
            return Err(AnalysisError::InvalidCardinalityThreshold(
                self.nominal_cardinality,
            ));
        }
        if !(0.0..=1.0).contains(&self.continuous_ratio) {
            return Err(AnalysisError::InvalidThreshold {
                param: "continuous_ratio",
                value: self.continuous_ratio,
            });
        }
        Ok(())
    }
}

/// How the correlation filter treats the sign of the coefficient.
///
/// The signed form discards strongly negatively correlated candidates;
/// switching to `Absolute` keeps them. The default stays signed so
/// existing selection pipelines keep their behavior; opting into the
/// absolute comparison is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CorrelationFilter {
    /// Compare the signed coefficient against the threshold.
    #[default]
    Signed,
    /// Compare the absolute value of the coefficient against the threshold.
    Absolute,
}

/// Configuration for numeric feature selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSelectionConfig {
    /// Minimum correlation against the target for a candidate to be
    /// kept (0.0 - 1.0). Default: 0.4
    pub correlation_threshold: f64,

    /// Maximum p-value of the correlation test (0.0 - 1.0). Default: 0.05
    pub p_value_threshold: f64,

    /// Sign handling for the correlation comparison. Default: Signed
    pub correlation_filter: CorrelationFilter,
}

impl Default for NumericSelectionConfig {
    fn default() -> Self {
        Self {
            correlation_threshold: 0.4,
            p_value_threshold: 0.05,
            correlation_filter: CorrelationFilter::default(),
        }
    }
}

impl NumericSelectionConfig {
    /// Validate the configuration and return an error if out of range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.correlation_threshold) {
            return Err(AnalysisError::InvalidThreshold {
                param: "correlation_threshold",
                value: self.correlation_threshold,
            });
        }
        if !(0.0..=1.0).contains(&self.p_value_threshold) {
            return Err(AnalysisError::InvalidThreshold {
                param: "p_value_threshold",
                value: self.p_value_threshold,
            });
        }
        Ok(())
    }
}

/// Configuration for categorical feature selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSelectionConfig {
    /// Maximum p-value of the group-comparison test (0.0 - 1.0).
    /// Default: 0.05
    pub p_value_threshold: f64,
}

impl Default for CategoricalSelectionConfig {
    fn default() -> Self {
        Self {
            p_value_threshold: 0.05,
        }
    }
}

impl CategoricalSelectionConfig {
    /// Validate the configuration and return an error if out of range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.p_value_threshold) {
            return Err(AnalysisError::InvalidThreshold {
                param: "p_value_threshold",
                value: self.p_value_threshold,
            });
        }
        Ok(())
    }
}
