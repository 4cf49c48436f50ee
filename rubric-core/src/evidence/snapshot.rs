use serde::{Deserialize, Serialize};

use super::{TraitKey, TraitState};

/// Immutable audit record of one aggregator transition.
///
/// `rating` and `weight` are the clipped values actually applied. A zero
/// `weight` marks a no-op transition where before and after are identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub trait_key: TraitKey,
    pub rating: f64,
    pub weight: f64,
    pub score_before: f64,
    pub weight_before: f64,
    pub score_after: f64,
    pub weight_after: f64,
    pub samples_after: u64,
}

impl Snapshot {
    pub fn transition(
        trait_key: TraitKey,
        rating: f64,
        weight: f64,
        before: &TraitState,
        after: &TraitState,
    ) -> Self {
        Self {
            trait_key,
            rating,
            weight,
            score_before: before.score,
            weight_before: before.weight,
            score_after: after.score,
            weight_after: after.weight,
            samples_after: after.samples,
        }
    }

    /// Whether the transition moved the trait state at all.
    pub fn is_noop(&self) -> bool {
        self.weight == 0.0
    }

    /// Signed movement of the weighted mean.
    pub fn score_delta(&self) -> f64 {
        self.score_after - self.score_before
    }
}
