//! Counters collected while aggregating evidence.

pub mod aggregation_metrics;

pub use aggregation_metrics::AggregationMetrics;
