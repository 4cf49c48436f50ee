//! Span definitions per operation: session, merge, scoring.

/// Create a span covering one evidence session's lifetime operations.
#[macro_export]
macro_rules! session_span {
    ($session_id:expr) => {
        tracing::info_span!("rubric.session", session_id = %$session_id)
    };
}

/// Create a span for combining partial states from several writers.
#[macro_export]
macro_rules! merge_span {
    ($partials:expr) => {
        tracing::info_span!("rubric.merge", partials = $partials)
    };
}

/// Create a span for one score composition.
#[macro_export]
macro_rules! scoring_span {
    () => {
        tracing::info_span!("rubric.score")
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SESSION: &str = "rubric.session";
    pub const MERGE: &str = "rubric.merge";
    pub const SCORING: &str = "rubric.score";
}
