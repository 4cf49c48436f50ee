/// Rubric system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of every 0–100 dimension score.
pub const SCORE_SCALE: f64 = 100.0;

/// Required sum of the two category weights.
pub const CATEGORY_WEIGHT_TOTAL: f64 = 100.0;

/// Allowed deviation of the category-weight sum from [`CATEGORY_WEIGHT_TOTAL`].
pub const CATEGORY_WEIGHT_EPSILON: f64 = 0.01;

/// Score assigned to workstyle telemetry that was never measured.
pub const NO_SIGNAL_SCORE: f64 = 100.0;
