use serde::{Deserialize, Serialize};

/// Raw workstyle counters from session telemetry.
///
/// Each field is optional: an unmeasured signal is normalized to 100
/// ("no negative signal observed"), not to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkstyleMetrics {
    /// Number of edit/run iterations.
    pub iteration_speed: Option<f64>,
    /// Average depth of debug loops.
    pub debug_loops_avg_depth: Option<f64>,
    /// AI-assist accountability, already on the 0–100 scale.
    pub ai_assist_accountability_score: Option<f64>,
}
