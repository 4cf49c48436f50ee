//! Configuration for Rubric.
//! TOML-based; every section falls back to compiled defaults.

pub mod aggregator_config;
pub mod defaults;
pub mod rubric_config;
pub mod scoring_config;

pub use aggregator_config::AggregatorConfig;
pub use rubric_config::RubricConfig;
pub use scoring_config::{CategoryWeights, CurveThresholds, DimensionWeights, ScoringConfiguration};
