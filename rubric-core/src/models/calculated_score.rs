use serde::{Deserialize, Serialize};

/// Output of the score composer. Every field is rounded to an integer value.
///
/// Kept as `f64` so a malformed configuration surfaces as NaN/Infinity
/// instead of a silently truncated integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatedScore {
    pub experience_score: f64,
    pub coding_score: f64,
    pub final_score: f64,
    pub normalized_iteration_speed: f64,
    pub normalized_debug_loops: f64,
    pub normalized_ai_assist: f64,
}
