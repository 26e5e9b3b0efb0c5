//! Variable Typing & Feature Selection for Regression EDA
//!
//! A polars-based engine that prepares features for a regression model
//! in two steps:
//!
//! - **Typing**: [`VariableProfiler`] profiles every column (dtype
//!   category, null share, cardinality) and assigns one of five
//!   [`TypeLabel`]s from a pair of cardinality thresholds, partitioning
//!   the column set into a [`Typification`].
//! - **Selection**: against a continuous numeric target,
//!   [`select_numeric`] keeps numeric candidates by Pearson correlation
//!   and its two-sided p-value, and [`select_categorical`] keeps
//!   categorical candidates by Mann-Whitney U (two groups) or one-way
//!   ANOVA (three or more).
//!
//! Data loading, plotting and CLI concerns live outside this crate; the
//! selection results are plain serializable structs a downstream
//! visualization layer can consume directly.
//!
//! # Modules
//!
//! - [`profiler`]: column profiling and typification
//! - [`selection`]: numeric and categorical feature selection
//! - [`config`]: thresholds with defaults and validation
//! - [`types`]: labels, profiles and selection results
//! - [`error`]: typed error taxonomy
//! - [`utils`]: dtype categorization helpers
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use varsift::{NumericSelectionConfig, TypingThresholds, VariableProfiler};
//!
//! let df: DataFrame = load_dataset()?;
//!
//! let typification = VariableProfiler::typify(&df, &TypingThresholds::default())?;
//! println!("numeric candidates: {:?}", typification.numeric_candidates());
//!
//! let hits = varsift::select_numeric(
//!     &df,
//!     "price",
//!     &NumericSelectionConfig::default(),
//!     Some(&typification),
//! )?;
//! for hit in &hits {
//!     println!("{}: r = {:.3}, p = {:.3e}", hit.column, hit.correlation, hit.p_value);
//! }
//! ```
//!
//! All computations are pure and synchronous: nothing is cached, the
//! input frame is never mutated, and every contract violation surfaces
//! as an [`AnalysisError`].

pub mod config;
pub mod error;
pub mod profiler;
pub mod selection;
mod stats;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{
    CategoricalSelectionConfig, CorrelationFilter, NumericSelectionConfig, TypingThresholds,
};
pub use error::{AnalysisError, Result};
pub use profiler::VariableProfiler;
pub use selection::{select_categorical, select_numeric};
pub use types::{
    CategoricalAssociation, ColumnProfile, NumericAssociation, TypeLabel, Typification,
};
pub use utils::DtypeKind;
