//! # rubric-observability
//!
//! Tracing subscriber setup, span constructors per operation, and counters
//! describing what an evidence session did with its input.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::AggregationMetrics;
pub use tracing_setup::{init_tracing, init_tracing_json};
