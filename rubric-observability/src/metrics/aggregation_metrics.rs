use serde::{Deserialize, Serialize};

use rubric_core::evidence::Snapshot;

/// What a session did with the evidence it was handed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationMetrics {
    /// Observations that moved a trait (positive clipped weight).
    pub accepted: u64,
    /// Observations whose clipped weight was zero.
    pub zero_weight: u64,
    /// Observations rejected as invalid input.
    pub rejected: u64,
    /// Partial states folded in from other writers.
    pub merges: u64,
    /// Sum of clipped weights actually applied.
    pub total_weight: f64,
}

impl AggregationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one completed transition.
    pub fn record_snapshot(&mut self, snapshot: &Snapshot) {
        if snapshot.is_noop() {
            self.zero_weight += 1;
        } else {
            self.accepted += 1;
            self.total_weight += snapshot.weight;
        }
    }

    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    pub fn record_merge(&mut self) {
        self.merges += 1;
    }

    /// Observations offered to the session, valid or not.
    pub fn total_offered(&self) -> u64 {
        self.accepted + self.zero_weight + self.rejected
    }

    /// Fraction of offered observations that were rejected.
    pub fn rejection_rate(&self) -> f64 {
        let offered = self.total_offered();
        if offered == 0 {
            return 0.0;
        }
        self.rejected as f64 / offered as f64
    }
}
