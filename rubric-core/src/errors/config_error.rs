/// Configuration boundary errors.
///
/// Raised while loading or validating a [`RubricConfig`](crate::RubricConfig),
/// never by the aggregation or scoring computations themselves.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    #[error("invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
}
