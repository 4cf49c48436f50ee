//! Error handling for Rubric.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod rubric_error;

pub use config_error::ConfigError;
pub use rubric_error::{require_number, require_present, RubricError, RubricResult};
