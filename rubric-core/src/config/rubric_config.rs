//! Top-level Rubric configuration.

use serde::{Deserialize, Serialize};

use super::{AggregatorConfig, ScoringConfiguration};
use crate::errors::ConfigError;

/// Aggregates all sub-configs. Missing sections fall back to defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RubricConfig {
    pub aggregator: AggregatorConfig,
    pub scoring: ScoringConfiguration,
}

impl RubricConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.aggregator.validate()?;
        self.scoring.validate()
    }
}
