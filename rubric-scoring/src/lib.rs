//! # rubric-scoring
//!
//! Runs once after evidence collection ends: normalizes workstyle telemetry
//! through inverse piecewise-linear curves, blends dimension scores into
//! experience and coding sub-scores, and weights those into a final score.
//!
//! The composer is total over well-formed input and validates nothing;
//! configuration checks live at the boundary in
//! [`ScoringConfiguration::validate`](rubric_core::ScoringConfiguration::validate).

pub mod composer;
pub mod normalization;

pub use composer::{calculate_score, calculate_score_breakdown, score_traits, ScoreBreakdown};
pub use normalization::{normalize_inverse, normalize_telemetry};
