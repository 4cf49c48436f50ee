use serde::{Deserialize, Serialize};

use super::TraitKey;

/// Running aggregate for one trait.
///
/// `weight == 0.0` is the "no evidence yet" sentinel; in that case `score`
/// holds the configured neutral initial value rather than being absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitState {
    /// Weighted mean of accepted ratings, always in [0.0, 1.0].
    pub score: f64,
    /// Cumulative evidence weight, never negative.
    pub weight: f64,
    /// Number of positive-weight observations folded in.
    pub samples: u64,
}

impl TraitState {
    /// A trait with no evidence, sitting at the neutral score.
    pub fn empty(initial_score: f64) -> Self {
        Self {
            score: initial_score.clamp(0.0, 1.0),
            weight: 0.0,
            samples: 0,
        }
    }

    /// True while no positive-weight evidence has been accepted.
    pub fn has_evidence(&self) -> bool {
        self.weight > 0.0
    }

    /// Component-wise comparison within `tolerance` (sample counts must match exactly).
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.samples == other.samples
            && (self.score - other.score).abs() <= tolerance
            && (self.weight - other.weight).abs() <= tolerance
    }
}

/// Per-interview aggregate state for every [`TraitKey`].
///
/// A plain value: transitions produce a new `AllTraitState` and never mutate
/// the previous one, so a frozen copy can be handed to readers freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllTraitState {
    pub adaptability: TraitState,
    pub creativity: TraitState,
    pub reasoning: TraitState,
}

impl AllTraitState {
    /// Fresh state: every trait at `initial_score` with zero weight and samples.
    pub fn new(initial_score: f64) -> Self {
        let empty = TraitState::empty(initial_score);
        Self {
            adaptability: empty,
            creativity: empty,
            reasoning: empty,
        }
    }

    pub fn get(&self, key: TraitKey) -> &TraitState {
        match key {
            TraitKey::Adaptability => &self.adaptability,
            TraitKey::Creativity => &self.creativity,
            TraitKey::Reasoning => &self.reasoning,
        }
    }

    /// Copy of `self` with one trait replaced.
    pub fn with(mut self, key: TraitKey, state: TraitState) -> Self {
        match key {
            TraitKey::Adaptability => self.adaptability = state,
            TraitKey::Creativity => self.creativity = state,
            TraitKey::Reasoning => self.reasoning = state,
        }
        self
    }

    /// Iterate `(key, state)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitKey, &TraitState)> + '_ {
        TraitKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Total positive-weight observations across all traits.
    pub fn total_samples(&self) -> u64 {
        self.iter().map(|(_, s)| s.samples).sum()
    }

    /// Every trait within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        TraitKey::ALL
            .into_iter()
            .all(|key| self.get(key).approx_eq(other.get(key), tolerance))
    }
}
