//! Error types for configuration loading and validation.

use crate::model::{Category, PerformanceTier};
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the run configuration.
///
/// Every variant is fatal: a run never starts generating with a table it
/// could not validate.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the expected layout.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A category has no profile, so its rows cannot be generated.
    #[error("No profile configured for category {0}")]
    MissingCategory(Category),

    /// A category was configured twice.
    #[error("Category {0} is configured more than once")]
    DuplicateCategory(Category),

    /// A category has nothing to draw its sub-category from.
    #[error("Category {0} has no sub-categories")]
    EmptySubCategories(Category),

    /// A vocabulary (colors, fabrics) is empty.
    #[error("Vocabulary '{0}' is empty")]
    EmptyVocabulary(&'static str),

    /// A performance tier has no profile.
    #[error("No profile configured for performance tier {0}")]
    MissingTier(PerformanceTier),

    /// A performance tier was configured twice.
    #[error("Performance tier {0} is configured more than once")]
    DuplicateTier(PerformanceTier),

    /// A range whose lower bound is not below its upper bound (or out of domain).
    #[error("Invalid interval for {field}: [{min}, {max})")]
    InvalidInterval { field: String, min: f64, max: f64 },

    /// A probability outside [0, 1].
    #[error("Invalid probability for {field}: {value}")]
    InvalidProbability { field: String, value: f64 },

    /// A categorical distribution whose weights do not form a distribution.
    #[error("Weights for {field} must sum to 1, got {sum}")]
    WeightsDoNotSumToOne { field: String, sum: f64 },

    /// The sampler rejected a weight set.
    #[error("Invalid weights for {field}: {reason}")]
    InvalidWeights { field: String, reason: String },

    /// `date_window_days` must allow at least one day of offset.
    #[error("date_window_days must be at least 1")]
    ZeroDateWindow,

    /// `date_window_days` reaches past the earliest representable date.
    #[error("date_window_days {days} reaches before the earliest representable date from {today}")]
    DateWindowTooLarge { days: u32, today: NaiveDate },
}
