//! # rubric-aggregate
//!
//! The evidence collection loop: weight composition → weighted-mean
//! aggregation → confidence → stop-rule gate. Every transition is a pure
//! function over plain values; `EvidenceSession` threads them together for a
//! single writer, and `merge`/`merge_all` combine partial states from many.

pub mod aggregator;
pub mod confidence;
pub mod session;
pub mod stop_rule;
pub mod weight;

pub use aggregator::{apply_all, init, merge, merge_all, update};
pub use confidence::{confidence, confidences, trait_confidence};
pub use session::{ClosedSession, EvidenceSession};
pub use stop_rule::{readiness, stop_check, Blocker, StopReport, TraitReadiness};
pub use weight::{compute_weight, compute_weight_breakdown, WeightBreakdown};
