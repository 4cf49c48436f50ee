use serde::{Deserialize, Serialize};
use tracing::debug;

use rubric_core::config::ScoringConfiguration;
use rubric_core::constants::NO_SIGNAL_SCORE;
use rubric_core::evidence::AllTraitState;
use rubric_core::models::{CalculatedScore, CodingScores, RawScores, WorkstyleMetrics};
use rubric_observability::scoring_span;

use crate::normalization::normalize_telemetry;

/// Full-precision intermediates of one composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub normalized_iteration_speed: f64,
    pub normalized_debug_loops: f64,
    pub normalized_ai_assist: f64,
    pub experience_score: f64,
    pub coding_score: f64,
    pub final_score: f64,
}

impl ScoreBreakdown {
    /// Round every field to the nearest integer, halves away from zero.
    pub fn rounded(&self) -> CalculatedScore {
        CalculatedScore {
            experience_score: self.experience_score.round(),
            coding_score: self.coding_score.round(),
            final_score: self.final_score.round(),
            normalized_iteration_speed: self.normalized_iteration_speed.round(),
            normalized_debug_loops: self.normalized_debug_loops.round(),
            normalized_ai_assist: self.normalized_ai_assist.round(),
        }
    }
}

/// Compose the final hiring score. Outputs are rounded; see
/// [`calculate_score_breakdown`] for the unrounded values.
pub fn calculate_score(
    raw: &RawScores,
    workstyle: &WorkstyleMetrics,
    config: &ScoringConfiguration,
) -> CalculatedScore {
    let _span = scoring_span!().entered();
    let breakdown = calculate_score_breakdown(raw, workstyle, config);
    debug!(
        experience = breakdown.experience_score,
        coding = breakdown.coding_score,
        final_score = breakdown.final_score,
        "score composed"
    );
    breakdown.rounded()
}

/// Every intermediate at full floating-point precision.
///
/// Zero weight sums or malformed thresholds yield NaN/Infinity rather than
/// an error.
pub fn calculate_score_breakdown(
    raw: &RawScores,
    workstyle: &WorkstyleMetrics,
    config: &ScoringConfiguration,
) -> ScoreBreakdown {
    let w = &config.weights;

    let normalized_iteration_speed =
        normalize_telemetry(workstyle.iteration_speed, &config.iteration_speed);
    let normalized_debug_loops =
        normalize_telemetry(workstyle.debug_loops_avg_depth, &config.debug_loops);
    let normalized_ai_assist = workstyle
        .ai_assist_accountability_score
        .unwrap_or(NO_SIGNAL_SCORE);

    let experience_score = weighted_average(&[
        (raw.adaptability, w.adaptability),
        (raw.creativity, w.creativity),
        (raw.reasoning, w.reasoning),
    ]);

    let coding_score = weighted_average(&[
        (raw.code_quality, w.code_quality),
        (raw.problem_solving, w.problem_solving),
        (raw.independence, w.independence),
        (normalized_iteration_speed, w.iteration_speed),
        (normalized_debug_loops, w.debug_loops),
        (normalized_ai_assist, w.ai_assist),
    ]);

    let final_score = weighted_average(&[
        (experience_score, config.categories.experience),
        (coding_score, config.categories.coding),
    ]);

    ScoreBreakdown {
        normalized_iteration_speed,
        normalized_debug_loops,
        normalized_ai_assist,
        experience_score,
        coding_score,
        final_score,
    }
}

/// Score a frozen trait state: trait means are lifted to 0–100 first.
pub fn score_traits(
    traits: &AllTraitState,
    coding: CodingScores,
    workstyle: &WorkstyleMetrics,
    config: &ScoringConfiguration,
) -> CalculatedScore {
    calculate_score(&RawScores::from_traits(traits, coding), workstyle, config)
}

/// `Σ(value·weight) / Σweight`.
fn weighted_average(pairs: &[(f64, f64)]) -> f64 {
    let (sum, total) = pairs
        .iter()
        .fold((0.0, 0.0), |(sum, total), &(value, weight)| {
            (sum + value * weight, total + weight)
        });
    sum / total
}
