use serde::{Deserialize, Serialize};

use rubric_core::errors::{require_number, RubricResult};
use rubric_core::evidence::WeightFactors;

/// Evidence weight from four signal-quality factors.
///
/// ```text
/// w = min(decay × quality × (independence + recency) / 2, w_max)
/// ```
///
/// Decay and quality gate multiplicatively: either at 0 nullifies the
/// sample. Independence and recency compensate for each other. Factors are
/// clipped to [0.0, 1.0]; a negative `w_max` caps at 0.0.
pub fn compute_weight(factors: &WeightFactors, w_max: f64) -> RubricResult<f64> {
    compute_weight_breakdown(factors, w_max).map(|b| b.weight)
}

/// Each clipped factor alongside the composed weight, for observability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBreakdown {
    pub decay: f64,
    pub quality: f64,
    pub independence: f64,
    pub recency: f64,
    /// Product before the `w_max` cap.
    pub uncapped: f64,
    pub w_max: f64,
    pub weight: f64,
}

impl WeightBreakdown {
    /// Whether the `w_max` cap bound the result.
    pub fn is_capped(&self) -> bool {
        self.uncapped > self.w_max
    }
}

/// Compute the weight with a full breakdown of each factor.
pub fn compute_weight_breakdown(
    factors: &WeightFactors,
    w_max: f64,
) -> RubricResult<WeightBreakdown> {
    let decay = unit("decay", factors.decay)?;
    let quality = unit("quality", factors.quality)?;
    let independence = unit("independence", factors.independence)?;
    let recency = unit("recency", factors.recency)?;
    let w_max = require_number("w_max", w_max)?.max(0.0);

    let uncapped = decay * quality * ((independence + recency) / 2.0);

    Ok(WeightBreakdown {
        decay,
        quality,
        independence,
        recency,
        uncapped,
        w_max,
        weight: uncapped.min(w_max),
    })
}

fn unit(field: &'static str, value: f64) -> RubricResult<f64> {
    Ok(require_number(field, value)?.clamp(0.0, 1.0))
}
