//! Error types for the provider adapters

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Single error kind covering every provider failure: missing credentials at
/// construction, network errors, non-success HTTP statuses, and malformed
/// response bodies. The underlying cause, when there is one, is chained via
/// `source()` for diagnostics.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ProviderError {
    /// Create an error with a message and no underlying cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The human-readable message identifying the provider and operation
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Non-success HTTP response, preserved as the wrapped cause of a
/// [`ProviderError`] so callers can recover the original status and body.
#[derive(Error, Debug)]
#[error("status {status}: {body}")]
pub struct HttpStatusError {
    pub status: StatusCode,
    pub body: String,
}

impl From<config::ConfigError> for ProviderError {
    fn from(err: config::ConfigError) -> Self {
        ProviderError::with_source("invalid configuration", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_display() {
        let err = ProviderError::new("OpenAI API key is missing");
        assert_eq!(err.to_string(), "OpenAI API key is missing");
    }

    #[test]
    fn test_status_error_discoverable_via_source() {
        let cause = HttpStatusError {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "slow down".to_string(),
        };
        let err = ProviderError::with_source("OpenAI - error generating response", cause);

        let source = std::error::Error::source(&err).expect("cause should be chained");
        let status_err = source
            .downcast_ref::<HttpStatusError>()
            .expect("cause should be an HttpStatusError");
        assert_eq!(status_err.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(status_err.body, "slow down");
    }
}
