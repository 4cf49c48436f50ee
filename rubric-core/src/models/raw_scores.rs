use serde::{Deserialize, Serialize};

use crate::constants::SCORE_SCALE;
use crate::evidence::{AllTraitState, TraitKey};

/// Coding-side dimension scores from independent evaluators, each 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CodingScores {
    pub code_quality: f64,
    pub problem_solving: f64,
    pub independence: f64,
}

/// All six raw dimension scores on the 0–100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    pub adaptability: f64,
    pub creativity: f64,
    pub reasoning: f64,
    pub code_quality: f64,
    pub problem_solving: f64,
    pub independence: f64,
}

impl RawScores {
    /// Lift frozen trait means from [0, 1] onto the 0–100 scale and attach
    /// the coding evaluator's scores.
    pub fn from_traits(traits: &AllTraitState, coding: CodingScores) -> Self {
        let scaled = |key: TraitKey| traits.get(key).score * SCORE_SCALE;
        Self {
            adaptability: scaled(TraitKey::Adaptability),
            creativity: scaled(TraitKey::Creativity),
            reasoning: scaled(TraitKey::Reasoning),
            code_quality: coding.code_quality,
            problem_solving: coding.problem_solving,
            independence: coding.independence,
        }
    }
}
