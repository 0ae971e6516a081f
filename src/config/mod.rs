//! # Run Configuration
//!
//! A run is driven by one [`Config`], assembled from three sections:
//!
//! - [`GeneratorConfig`]: the tables the catalog is drawn from.
//! - [`AnalysisConfig`]: thresholds and list lengths of the derived views.
//! - [`OutputConfig`]: where the CSV and charts go.
//!
//! Every section defaults to the reference values, so an empty file (or no
//! file at all) reproduces the reference run. A TOML file only needs the keys
//! it overrides:
//!
//! ```toml
//! [generator]
//! seed = 7
//!
//! [analysis]
//! top_rated_count = 5
//!
//! [output]
//! dir = "reports"
//! chart_format = "svg"
//! ```

pub mod error;
pub mod generator;

pub use error::*;
pub use generator::*;

use crate::charts::ChartFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Thresholds and list lengths of the aggregation views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rows reported per category in the best-seller view.
    pub top_sellers_per_category: usize,
    /// Rows in the global highest-rated list.
    pub top_rated_count: usize,
    /// Minimum rating for a slow mover to count as an opportunity.
    pub opportunity_min_rating: f64,
    /// Critical products printed in full in the console report.
    pub critical_preview: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_sellers_per_category: 3,
            top_rated_count: 10,
            opportunity_min_rating: 4.5,
            critical_preview: 5,
        }
    }
}

/// Output locations and chart switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub csv_file: String,
    pub charts: bool,
    pub chart_format: ChartFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            csv_file: "product_analysis_data.csv".to_string(),
            charts: true,
            chart_format: ChartFormat::Png,
        }
    }
}

impl OutputConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.dir.join(&self.csv_file)
    }
}

/// Root configuration of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Loads a TOML file; keys it does not name keep their reference values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading config");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_empty_file_gives_reference_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generator.seed, 42);
    }

    #[test]
    fn test_partial_file_overrides_named_keys_only() {
        let config = Config::from_toml(
            r#"
            [generator]
            seed = 7
            premium_probability = 0.2

            [output]
            chart_format = "svg"
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.seed, 7);
        assert_eq!(config.generator.premium_probability, 0.2);
        assert_eq!(config.generator.total_count(), 1520);
        assert_eq!(config.output.chart_format, ChartFormat::Svg);
        assert_eq!(config.analysis, AnalysisConfig::default());
    }

    #[test]
    fn test_category_table_from_toml() {
        let config = Config::from_toml(
            r#"
            [[generator.categories]]
            category = "Dining"
            count = 5
            sub_categories = ["Table Cloths"]
            price = { min = 100.0, max = 200.0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.categories.len(), 1);
        assert_eq!(config.generator.categories[0].category, Category::Dining);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingCategory(Category::Bedroom))
        ));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = Config::from_toml("[generator\nseed = 1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = Config::load("/definitely/not/here/catalog.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
