//! Stop-rule gate: coverage ∧ sample floor ∧ confidence ≥ tau, for every trait.
//!
//! Each condition is independently necessary. Coverage and weight only grow
//! under non-negative evidence, so once the gate opens it stays open.

use serde::{Deserialize, Serialize};

use rubric_core::config::AggregatorConfig;
use rubric_core::evidence::{AllTraitState, CoverageStatus, TraitKey};

use crate::confidence::trait_confidence;

/// A condition keeping one trait from being ready.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Blocker {
    Uncovered,
    TooFewSamples { have: u64, need: u64 },
    LowConfidence { confidence: f64, threshold: f64 },
}

/// Gate evaluation for one trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitReadiness {
    pub trait_key: TraitKey,
    pub covered: bool,
    pub samples: u64,
    pub confidence: f64,
    pub blockers: Vec<Blocker>,
}

impl TraitReadiness {
    pub fn is_ready(&self) -> bool {
        self.blockers.is_empty()
    }
}

/// Gate evaluation across all traits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopReport {
    pub traits: Vec<TraitReadiness>,
}

impl StopReport {
    pub fn is_ready(&self) -> bool {
        self.traits.iter().all(TraitReadiness::is_ready)
    }

    /// Traits that still need probing.
    pub fn pending(&self) -> impl Iterator<Item = TraitKey> + '_ {
        self.traits
            .iter()
            .filter(|t| !t.is_ready())
            .map(|t| t.trait_key)
    }

    pub fn get(&self, key: TraitKey) -> Option<&TraitReadiness> {
        self.traits.iter().find(|t| t.trait_key == key)
    }
}

/// True iff every trait is covered, has at least `min_samples` samples, and
/// has confidence ≥ `stop_threshold`.
pub fn stop_check(
    state: &AllTraitState,
    coverage: &CoverageStatus,
    config: &AggregatorConfig,
) -> bool {
    TraitKey::ALL.into_iter().all(|key| {
        let trait_state = state.get(key);
        coverage.is_covered(key)
            && trait_state.samples >= config.min_samples.max(1)
            && trait_confidence(trait_state, config) >= config.stop_threshold
    })
}

/// Per-trait breakdown of [`stop_check`], naming what blocks each trait.
pub fn readiness(
    state: &AllTraitState,
    coverage: &CoverageStatus,
    config: &AggregatorConfig,
) -> StopReport {
    let need = config.min_samples.max(1);
    let traits = TraitKey::ALL
        .into_iter()
        .map(|key| {
            let trait_state = state.get(key);
            let covered = coverage.is_covered(key);
            let confidence = trait_confidence(trait_state, config);

            let mut blockers = Vec::new();
            if !covered {
                blockers.push(Blocker::Uncovered);
            }
            if trait_state.samples < need {
                blockers.push(Blocker::TooFewSamples {
                    have: trait_state.samples,
                    need,
                });
            }
            if confidence < config.stop_threshold {
                blockers.push(Blocker::LowConfidence {
                    confidence,
                    threshold: config.stop_threshold,
                });
            }

            TraitReadiness {
                trait_key: key,
                covered,
                samples: trait_state.samples,
                confidence,
                blockers,
            }
        })
        .collect();

    StopReport { traits }
}
