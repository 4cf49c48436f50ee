//! Plain value objects consumed and produced by the score composer.

pub mod calculated_score;
pub mod raw_scores;
pub mod workstyle_metrics;

pub use calculated_score::CalculatedScore;
pub use raw_scores::{CodingScores, RawScores};
pub use workstyle_metrics::WorkstyleMetrics;
