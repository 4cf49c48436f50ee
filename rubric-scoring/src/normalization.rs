use rubric_core::config::CurveThresholds;
use rubric_core::constants::NO_SIGNAL_SCORE;

/// Inverse piecewise-linear curve mapping a "lower is better" count to 0–100.
///
/// ```text
/// 0                      → 100
/// (0, moderate]          → 100 → 75
/// (moderate, high]       →  75 → 50
/// (high, 2 × high)       →  50 → 0
/// ≥ 2 × high             →   0
/// ```
///
/// Negative values clamp to 0. NaN counts as no signal.
pub fn normalize_inverse(value: f64, thresholds: &CurveThresholds) -> f64 {
    let CurveThresholds { moderate, high } = *thresholds;
    let value = value.max(0.0);

    if value == 0.0 {
        return 100.0;
    }
    if value <= moderate {
        return 100.0 - (value / moderate) * 25.0;
    }
    if value <= high {
        return 75.0 - ((value - moderate) / (high - moderate)) * 25.0;
    }
    if value >= 2.0 * high {
        return 0.0;
    }
    (50.0 - ((value - high) / high) * 50.0).max(0.0)
}

/// Normalize an optional telemetry counter; unmeasured means 100.
pub fn normalize_telemetry(value: Option<f64>, thresholds: &CurveThresholds) -> f64 {
    value.map_or(NO_SIGNAL_SCORE, |v| normalize_inverse(v, thresholds))
}
