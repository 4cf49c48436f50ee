//! Online weighted mean per trait with an associative, commutative merge.
//!
//! The running state is `Σ(wᵢ·rᵢ) / Σwᵢ` computed incrementally, so any
//! permutation of the same observations, and any split of them into partial
//! states later merged, lands on the same `(S, W, n)` up to float rounding.

use rayon::prelude::*;

use rubric_core::config::AggregatorConfig;
use rubric_core::errors::{require_number, RubricResult};
use rubric_core::evidence::{AllTraitState, Observation, Snapshot, TraitKey, TraitState};
use rubric_observability::merge_span;

/// Fresh per-interview state: every trait neutral, no weight, no samples.
pub fn init(config: &AggregatorConfig) -> AllTraitState {
    AllTraitState::new(config.initial_score)
}

/// Fold one observation into `state`.
///
/// Rating is clipped to [0.0, 1.0] and weight to [0.0, w_max]. A NaN rating
/// or weight is rejected before anything is computed. A zero clipped weight
/// returns `state` unchanged (W and n included) with a no-op snapshot.
pub fn update(
    state: &AllTraitState,
    observation: &Observation,
    config: &AggregatorConfig,
) -> RubricResult<(AllTraitState, Snapshot)> {
    let rating = require_number("rating", observation.rating)?.clamp(0.0, 1.0);
    let weight = require_number("weight", observation.weight)?.clamp(0.0, config.w_max.max(0.0));

    let key = observation.trait_key;
    let before = *state.get(key);

    if weight == 0.0 {
        let snapshot = Snapshot::transition(key, rating, 0.0, &before, &before);
        return Ok((*state, snapshot));
    }

    let after = TraitState {
        score: blend(before.score, rating, share(weight, before.weight)),
        weight: before.weight + weight,
        samples: before.samples + 1,
    };

    let snapshot = Snapshot::transition(key, rating, weight, &before, &after);
    Ok((state.with(key, after), snapshot))
}

/// Apply observations in order.
///
/// Atomic: the first invalid observation aborts the batch and no partial
/// state escapes.
pub fn apply_all(
    state: &AllTraitState,
    observations: &[Observation],
    config: &AggregatorConfig,
) -> RubricResult<(AllTraitState, Vec<Snapshot>)> {
    let mut current = *state;
    let mut snapshots = Vec::with_capacity(observations.len());
    for observation in observations {
        let (next, snapshot) = update(&current, observation, config)?;
        current = next;
        snapshots.push(snapshot);
    }
    Ok((current, snapshots))
}

/// Combine two partial states as if all their evidence had been applied to one.
pub fn merge(a: &AllTraitState, b: &AllTraitState, config: &AggregatorConfig) -> AllTraitState {
    TraitKey::ALL.into_iter().fold(*a, |acc, key| {
        acc.with(
            key,
            merge_trait(a.get(key), b.get(key), config.initial_score),
        )
    })
}

/// Reduce any number of partial states in parallel.
///
/// Merge is associative and commutative with `init(config)` as identity, so
/// the result does not depend on how rayon splits the work.
pub fn merge_all(partials: &[AllTraitState], config: &AggregatorConfig) -> AllTraitState {
    let _span = merge_span!(partials.len()).entered();
    partials
        .par_iter()
        .copied()
        .reduce(|| init(config), |a, b| merge(&a, &b, config))
}

fn merge_trait(a: &TraitState, b: &TraitState, initial_score: f64) -> TraitState {
    let weight = a.weight + b.weight;
    let score = if weight > 0.0 {
        blend(a.score, b.score, share(b.weight, a.weight))
    } else {
        initial_score.clamp(0.0, 1.0)
    };
    TraitState {
        score,
        weight,
        samples: a.samples + b.samples,
    }
}

/// Fraction of the pooled weight contributed by `part`, in [0.0, 1.0].
///
/// Computed as `1 / (1 + rest / part)` so weights near `f64::MAX` never
/// overflow into `inf / inf`.
fn share(part: f64, rest: f64) -> f64 {
    if part <= 0.0 {
        return 0.0;
    }
    let ratio = rest / part;
    if ratio.is_nan() {
        // Both sides infinite: pool them evenly.
        return 0.5;
    }
    1.0 / (1.0 + ratio)
}

/// Move `from` toward `to` by `fraction`; both ends in [0.0, 1.0] keep the
/// result there.
fn blend(from: f64, to: f64, fraction: f64) -> f64 {
    (from + fraction * (to - from)).clamp(0.0, 1.0)
}
