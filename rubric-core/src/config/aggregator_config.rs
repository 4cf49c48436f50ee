use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Per-session aggregation parameters. Immutable once a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Cap on any single observation's weight.
    pub w_max: f64,
    /// Shape `c` of `confidence(W) = W / (W + c)`. Must be positive.
    pub confidence_shape: f64,
    /// Confidence a trait must reach before collection may stop (`tau`).
    pub stop_threshold: f64,
    /// Neutral score held by traits with no evidence.
    pub initial_score: f64,
    /// Tolerance for order-invariance and merge comparisons.
    pub numeric_tolerance: f64,
    /// Positive-weight samples each trait needs before the gate can open.
    pub min_samples: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            w_max: defaults::DEFAULT_W_MAX,
            confidence_shape: defaults::DEFAULT_CONFIDENCE_SHAPE,
            stop_threshold: defaults::DEFAULT_STOP_THRESHOLD,
            initial_score: defaults::DEFAULT_INITIAL_SCORE,
            numeric_tolerance: defaults::DEFAULT_NUMERIC_TOLERANCE,
            min_samples: defaults::DEFAULT_MIN_SAMPLES,
        }
    }
}

impl AggregatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.w_max >= 0.0 && self.w_max.is_finite()) {
            return Err(ConfigError::invalid(
                "aggregator.w_max",
                "must be a finite value >= 0.0",
            ));
        }
        if !(self.confidence_shape > 0.0 && self.confidence_shape.is_finite()) {
            return Err(ConfigError::invalid(
                "aggregator.confidence_shape",
                "must be a finite value > 0.0",
            ));
        }
        // confidence() never reaches 1.0, so tau = 1.0 would never stop.
        if !(0.0..1.0).contains(&self.stop_threshold) {
            return Err(ConfigError::invalid(
                "aggregator.stop_threshold",
                "must be in [0.0, 1.0)",
            ));
        }
        if !(0.0..=1.0).contains(&self.initial_score) {
            return Err(ConfigError::invalid(
                "aggregator.initial_score",
                "must be between 0.0 and 1.0",
            ));
        }
        if !(self.numeric_tolerance > 0.0) {
            return Err(ConfigError::invalid(
                "aggregator.numeric_tolerance",
                "must be greater than 0.0",
            ));
        }
        if self.min_samples == 0 {
            return Err(ConfigError::invalid(
                "aggregator.min_samples",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
