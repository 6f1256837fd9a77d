use thiserror::Error;

/// Errors that can occur outside of the (infallible) parse itself.
#[derive(Debug, Error)]
pub enum MetaError {
    /// A built-in regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// A lookup table did not recognise the given string.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// Which table was consulted (e.g. "resolution").
        kind: &'static str,
        /// The string that failed to resolve.
        value: String,
    },

    /// The parser configuration is inconsistent.
    #[error("invalid parser configuration: {0}")]
    InvalidConfig(String),
}

impl MetaError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

/// Result type alias for reelmeta operations.
pub type Result<T> = std::result::Result<T, MetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = MetaError::unknown("resolution", "999x");
        assert_eq!(err.to_string(), "unknown resolution: \"999x\"");

        let err = MetaError::InvalidConfig("empty year window".into());
        assert!(err.to_string().contains("empty year window"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MetaError>();
    }
}
