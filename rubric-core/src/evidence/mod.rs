//! Trait-level evidence types: keys, running state, observations, audit snapshots.

pub mod coverage;
pub mod observation;
pub mod snapshot;
pub mod trait_key;
pub mod trait_state;

pub use coverage::CoverageStatus;
pub use observation::{Observation, ObservationRecord, WeightFactors, WeightFactorsRecord};
pub use snapshot::Snapshot;
pub use trait_key::TraitKey;
pub use trait_state::{AllTraitState, TraitState};
