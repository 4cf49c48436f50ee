use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{CATEGORY_WEIGHT_EPSILON, CATEGORY_WEIGHT_TOTAL};
use crate::errors::ConfigError;

/// Per-role weights for the nine sub-dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionWeights {
    pub adaptability: f64,
    pub creativity: f64,
    pub reasoning: f64,
    pub code_quality: f64,
    pub problem_solving: f64,
    pub independence: f64,
    pub iteration_speed: f64,
    pub debug_loops: f64,
    pub ai_assist: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            adaptability: defaults::DEFAULT_ADAPTABILITY_WEIGHT,
            creativity: defaults::DEFAULT_CREATIVITY_WEIGHT,
            reasoning: defaults::DEFAULT_REASONING_WEIGHT,
            code_quality: defaults::DEFAULT_CODE_QUALITY_WEIGHT,
            problem_solving: defaults::DEFAULT_PROBLEM_SOLVING_WEIGHT,
            independence: defaults::DEFAULT_INDEPENDENCE_WEIGHT,
            iteration_speed: defaults::DEFAULT_ITERATION_SPEED_WEIGHT,
            debug_loops: defaults::DEFAULT_DEBUG_LOOPS_WEIGHT,
            ai_assist: defaults::DEFAULT_AI_ASSIST_WEIGHT,
        }
    }
}

impl DimensionWeights {
    fn named(&self) -> [(&'static str, f64); 9] {
        [
            ("adaptability", self.adaptability),
            ("creativity", self.creativity),
            ("reasoning", self.reasoning),
            ("code_quality", self.code_quality),
            ("problem_solving", self.problem_solving),
            ("independence", self.independence),
            ("iteration_speed", self.iteration_speed),
            ("debug_loops", self.debug_loops),
            ("ai_assist", self.ai_assist),
        ]
    }
}

/// Experience vs. coding blend. Must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub experience: f64,
    pub coding: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            experience: defaults::DEFAULT_EXPERIENCE_CATEGORY_WEIGHT,
            coding: defaults::DEFAULT_CODING_CATEGORY_WEIGHT,
        }
    }
}

/// Breakpoints of one inverse piecewise-linear normalization curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveThresholds {
    /// Value normalized to 75.
    pub moderate: f64,
    /// Value normalized to 50. Twice this value normalizes to 0.
    pub high: f64,
}

impl CurveThresholds {
    pub fn new(moderate: f64, high: f64) -> Self {
        Self { moderate, high }
    }

    fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if !(self.moderate >= 0.0) {
            return Err(ConfigError::invalid(
                format!("{field}.moderate"),
                "must be >= 0.0",
            ));
        }
        if !(self.moderate < self.high) {
            return Err(ConfigError::invalid(
                field,
                format!(
                    "moderate threshold ({}) must be below high threshold ({})",
                    self.moderate, self.high
                ),
            ));
        }
        Ok(())
    }
}

/// Tunable weights and thresholds for one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfiguration {
    pub weights: DimensionWeights,
    pub categories: CategoryWeights,
    pub iteration_speed: CurveThresholds,
    pub debug_loops: CurveThresholds,
}

impl Default for ScoringConfiguration {
    fn default() -> Self {
        Self {
            weights: DimensionWeights::default(),
            categories: CategoryWeights::default(),
            iteration_speed: CurveThresholds::new(
                defaults::DEFAULT_ITERATION_SPEED_MODERATE,
                defaults::DEFAULT_ITERATION_SPEED_HIGH,
            ),
            debug_loops: CurveThresholds::new(
                defaults::DEFAULT_DEBUG_LOOPS_MODERATE,
                defaults::DEFAULT_DEBUG_LOOPS_HIGH,
            ),
        }
    }
}

impl ScoringConfiguration {
    /// Boundary check the score composer relies on but never performs itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, weight) in self.weights.named() {
            if !(weight >= 0.0 && weight.is_finite()) {
                return Err(ConfigError::invalid(
                    format!("scoring.weights.{name}"),
                    format!("weight must be a finite value >= 0, got {weight}"),
                ));
            }
        }

        let CategoryWeights { experience, coding } = self.categories;
        for (name, weight) in [("experience", experience), ("coding", coding)] {
            if !(weight >= 0.0) {
                return Err(ConfigError::invalid(
                    format!("scoring.categories.{name}"),
                    format!("weight must be >= 0, got {weight}"),
                ));
            }
        }
        let total = experience + coding;
        if !((total - CATEGORY_WEIGHT_TOTAL).abs() <= CATEGORY_WEIGHT_EPSILON) {
            return Err(ConfigError::invalid(
                "scoring.categories",
                format!(
                    "experience ({experience}) and coding ({coding}) weights must sum to {CATEGORY_WEIGHT_TOTAL}, got {total}"
                ),
            ));
        }

        self.iteration_speed.validate("scoring.iteration_speed")?;
        self.debug_loops.validate("scoring.debug_loops")?;
        Ok(())
    }
}
