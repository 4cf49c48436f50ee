use rubric_core::config::AggregatorConfig;
use rubric_core::evidence::{AllTraitState, TraitKey, TraitState};

/// `confidence(W) = W / (W + c)`.
///
/// Strictly increasing in `W` for `c > 0`, zero at `W = 0`, asymptotic to 1.
/// Each extra unit of weight buys less confidence than the last.
pub fn confidence(weight: f64, shape: f64) -> f64 {
    let weight = weight.max(0.0);
    if weight == 0.0 {
        return 0.0;
    }
    weight / (weight + shape)
}

pub fn trait_confidence(state: &TraitState, config: &AggregatorConfig) -> f64 {
    confidence(state.weight, config.confidence_shape)
}

/// Confidence of every trait, in canonical order.
pub fn confidences(state: &AllTraitState, config: &AggregatorConfig) -> [(TraitKey, f64); 3] {
    TraitKey::ALL.map(|key| (key, trait_confidence(state.get(key), config)))
}
