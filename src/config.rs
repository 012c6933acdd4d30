//! YAML configuration file support for the wardrobe linker.
//!
//! Deployments describe closet admission and suggestion ranking in a single
//! YAML file and load it at start-up. Every section and every field is
//! optional; omitted values fall back to the library defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Wardrobe linker configuration
//! version: "1.0"
//! name: "production"
//!
//! closet:
//!   version: 1
//!   trim_names: true
//!   strip_control_chars: true
//!   max_attribute_bytes: 10240
//!
//! suggestions:
//!   min_score: 0.6
//!   max_results: 5
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use closet::ClosetConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the linker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LinkerConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Closet admission configuration
    #[serde(default)]
    pub closet: ClosetConfig,

    /// Suggestion ranking configuration
    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

impl LinkerConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LinkerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        // Check version
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.closet
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.suggestions.validate()?;

        Ok(())
    }
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            closet: ClosetConfig::default(),
            suggestions: SuggestionConfig::default(),
        }
    }
}

/// Suggestion ranking YAML configuration
///
/// Controls [`Linker::suggest`](crate::Linker::suggest): how close a closet
/// name must be to the query before it is offered, and how many suggestions
/// one query may return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Minimum similarity score a name must reach to be suggested.
    /// Must lie in `[0.0, 1.0]`.
    ///
    /// Default: `0.6`
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Maximum number of suggestions returned per query.
    ///
    /// Default: `5`
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl SuggestionConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(ConfigLoadError::Validation(format!(
                "suggestions.min_score must lie in [0.0, 1.0], got {}",
                self.min_score
            )));
        }
        if self.max_results == 0 {
            return Err(ConfigLoadError::Validation(
                "suggestions.max_results must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_results: default_max_results(),
        }
    }
}

fn default_min_score() -> f64 {
    0.6
}
fn default_max_results() -> usize {
    5
}
