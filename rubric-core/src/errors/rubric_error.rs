use super::ConfigError;

/// Result alias used across the workspace.
pub type RubricResult<T> = Result<T, RubricError>;

/// Top-level error type.
///
/// `InvalidInput` is the only variant the computation layer raises. It is
/// always caller-correctable and a rejected update leaves state untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RubricError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RubricError {
    /// A required numeric field was absent.
    pub fn missing(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            reason: "value is missing".to_string(),
        }
    }

    /// A numeric field was NaN.
    pub fn not_a_number(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            reason: "value is NaN".to_string(),
        }
    }

    /// Returns true for caller-correctable input errors.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Reject NaN, pass every other value through untouched.
pub fn require_number(field: &'static str, value: f64) -> RubricResult<f64> {
    if value.is_nan() {
        return Err(RubricError::not_a_number(field));
    }
    Ok(value)
}

/// Reject a missing or NaN value.
pub fn require_present(field: &'static str, value: Option<f64>) -> RubricResult<f64> {
    match value {
        Some(v) => require_number(field, v),
        None => Err(RubricError::missing(field)),
    }
}
