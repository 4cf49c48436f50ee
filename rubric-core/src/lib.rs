//! # rubric-core
//!
//! Foundation crate for the Rubric evidence aggregation system.
//! Defines the trait/evidence value objects, scoring models, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod evidence;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{AggregatorConfig, RubricConfig, ScoringConfiguration};
pub use errors::{ConfigError, RubricError, RubricResult};
pub use evidence::{
    AllTraitState, CoverageStatus, Observation, ObservationRecord, Snapshot, TraitKey, TraitState,
    WeightFactors, WeightFactorsRecord,
};
pub use models::{CalculatedScore, CodingScores, RawScores, WorkstyleMetrics};
