//! Single-writer evidence session.
//!
//! Owns the config, the current [`AllTraitState`], the audit trail of
//! snapshots and the aggregation counters. Other writers hand their partial
//! states in through [`EvidenceSession::absorb`]; nothing is shared mutably.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use rubric_core::config::AggregatorConfig;
use rubric_core::errors::RubricResult;
use rubric_core::evidence::{
    AllTraitState, CoverageStatus, Observation, ObservationRecord, Snapshot, TraitKey,
    WeightFactors,
};
use rubric_observability::{session_span, AggregationMetrics};

use crate::aggregator;
use crate::stop_rule::{self, StopReport};
use crate::weight;

#[derive(Debug)]
pub struct EvidenceSession {
    id: String,
    config: AggregatorConfig,
    state: AllTraitState,
    snapshots: Vec<Snapshot>,
    metrics: AggregationMetrics,
    /// Number of snapshots recorded when the gate first opened.
    ready_at: Option<usize>,
}

impl EvidenceSession {
    /// Start a session. The config is validated once here and then frozen.
    pub fn new(id: impl Into<String>, config: AggregatorConfig) -> RubricResult<Self> {
        config.validate()?;
        Ok(Self {
            id: id.into(),
            state: aggregator::init(&config),
            config,
            snapshots: Vec::new(),
            metrics: AggregationMetrics::new(),
            ready_at: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// The current state. Valid and usable at any point.
    pub fn state(&self) -> &AllTraitState {
        &self.state
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn metrics(&self) -> &AggregationMetrics {
        &self.metrics
    }

    /// Fold one observation in. On error the state is left untouched.
    pub fn record(&mut self, observation: Observation) -> RubricResult<Snapshot> {
        let _span = session_span!(self.id).entered();

        let (next, snapshot) = match aggregator::update(&self.state, &observation, &self.config)
        {
            Ok(result) => result,
            Err(e) => {
                self.metrics.record_rejected();
                warn!(trait_key = %observation.trait_key, error = %e, "observation rejected");
                return Err(e);
            }
        };

        if snapshot.is_noop() {
            trace!(trait_key = %snapshot.trait_key, "zero-weight observation, state unchanged");
        } else {
            debug!(
                trait_key = %snapshot.trait_key,
                rating = snapshot.rating,
                weight = snapshot.weight,
                score = snapshot.score_after,
                cumulative_weight = snapshot.weight_after,
                samples = snapshot.samples_after,
                "observation applied"
            );
        }

        self.state = next;
        self.metrics.record_snapshot(&snapshot);
        self.snapshots.push(snapshot);
        Ok(snapshot)
    }

    /// Convert a wire record, then [`record`](Self::record) it.
    pub fn record_raw(&mut self, record: ObservationRecord) -> RubricResult<Snapshot> {
        match Observation::try_from(record) {
            Ok(observation) => self.record(observation),
            Err(e) => {
                self.metrics.record_rejected();
                warn!(session_id = %self.id, error = %e, "malformed observation record");
                Err(e)
            }
        }
    }

    /// Compose the weight from signal-quality factors, then record.
    pub fn record_factored(
        &mut self,
        trait_key: TraitKey,
        rating: f64,
        factors: &WeightFactors,
    ) -> RubricResult<Snapshot> {
        let weight = match weight::compute_weight(factors, self.config.w_max) {
            Ok(w) => w,
            Err(e) => {
                self.metrics.record_rejected();
                warn!(trait_key = %trait_key, error = %e, "weight factors rejected");
                return Err(e);
            }
        };
        self.record(Observation::new(trait_key, rating, weight))
    }

    /// Merge a partial state accumulated by another writer.
    pub fn absorb(&mut self, partial: &AllTraitState) {
        let _span = session_span!(self.id).entered();
        self.state = aggregator::merge(&self.state, partial, &self.config);
        self.metrics.record_merge();
        info!(
            samples = partial.total_samples(),
            total_samples = self.state.total_samples(),
            "partial state merged"
        );
    }

    /// Per-trait gate breakdown. Pure; does not latch.
    pub fn readiness(&self, coverage: &CoverageStatus) -> StopReport {
        stop_rule::readiness(&self.state, coverage, &self.config)
    }

    /// Poll the stop-rule gate.
    ///
    /// Latches: once the gate has opened, later polls report ready even if
    /// the caller supplies a stale coverage map.
    pub fn check_stop(&mut self, coverage: &CoverageStatus) -> bool {
        if self.ready_at.is_some() {
            return true;
        }
        if !stop_rule::stop_check(&self.state, coverage, &self.config) {
            return false;
        }
        self.ready_at = Some(self.snapshots.len());
        info!(
            session_id = %self.id,
            observations = self.snapshots.len(),
            total_samples = self.state.total_samples(),
            "stop rule satisfied, evidence collection can end"
        );
        true
    }

    /// Snapshot count at the moment the gate first opened.
    pub fn ready_at(&self) -> Option<usize> {
        self.ready_at
    }

    /// End the stage. The returned value is immutable.
    pub fn close(self) -> ClosedSession {
        info!(
            session_id = %self.id,
            accepted = self.metrics.accepted,
            rejected = self.metrics.rejected,
            merges = self.metrics.merges,
            "evidence session closed"
        );
        ClosedSession {
            id: self.id,
            state: self.state,
            snapshots: self.snapshots,
            metrics: self.metrics,
            ready_at: self.ready_at,
        }
    }
}

/// Frozen result of an evidence session, read by the score composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedSession {
    id: String,
    state: AllTraitState,
    snapshots: Vec<Snapshot>,
    metrics: AggregationMetrics,
    ready_at: Option<usize>,
}

impl ClosedSession {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &AllTraitState {
        &self.state
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn metrics(&self) -> &AggregationMetrics {
        &self.metrics
    }

    /// Whether the gate had opened before the session closed.
    pub fn reached_stop(&self) -> bool {
        self.ready_at.is_some()
    }
}
