//! Compiled defaults for every config section.

// Aggregator
pub const DEFAULT_W_MAX: f64 = 1.0;
pub const DEFAULT_CONFIDENCE_SHAPE: f64 = 2.0;
pub const DEFAULT_STOP_THRESHOLD: f64 = 0.6;
pub const DEFAULT_INITIAL_SCORE: f64 = 0.5;
pub const DEFAULT_NUMERIC_TOLERANCE: f64 = 1e-9;
pub const DEFAULT_MIN_SAMPLES: u64 = 1;

// Experience dimension weights
pub const DEFAULT_ADAPTABILITY_WEIGHT: f64 = 33.0;
pub const DEFAULT_CREATIVITY_WEIGHT: f64 = 33.0;
pub const DEFAULT_REASONING_WEIGHT: f64 = 34.0;

// Coding dimension weights
pub const DEFAULT_CODE_QUALITY_WEIGHT: f64 = 25.0;
pub const DEFAULT_PROBLEM_SOLVING_WEIGHT: f64 = 25.0;
pub const DEFAULT_INDEPENDENCE_WEIGHT: f64 = 20.0;
pub const DEFAULT_ITERATION_SPEED_WEIGHT: f64 = 10.0;
pub const DEFAULT_DEBUG_LOOPS_WEIGHT: f64 = 10.0;
pub const DEFAULT_AI_ASSIST_WEIGHT: f64 = 10.0;

// Category weights
pub const DEFAULT_EXPERIENCE_CATEGORY_WEIGHT: f64 = 50.0;
pub const DEFAULT_CODING_CATEGORY_WEIGHT: f64 = 50.0;

// Normalization curve thresholds
pub const DEFAULT_ITERATION_SPEED_MODERATE: f64 = 5.0;
pub const DEFAULT_ITERATION_SPEED_HIGH: f64 = 10.0;
pub const DEFAULT_DEBUG_LOOPS_MODERATE: f64 = 3.0;
pub const DEFAULT_DEBUG_LOOPS_HIGH: f64 = 6.0;
