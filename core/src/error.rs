//! Error types for the security panel client.
//!
//! - [`TransportError`] - network and decoding failures talking to the server
//! - [`ReviewError`] - outcomes of the CSV review flow operations
//! - [`ConfigError`] - invalid embedded configuration
//!
//! Review errors never escape the flow: they are surfaced through the
//! notifier and returned to the caller only so it can log or inspect them.

use thiserror::Error;

// =============================================================================
// Transport Errors
// =============================================================================

/// Failures below the application protocol.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// The request could not be built or sent, or the body could not be read.
    #[error("Request failed: {0}")]
    Request(String),

    /// The body is not the JSON document we expect.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

// =============================================================================
// Review Flow Errors
// =============================================================================

/// Errors returned by [`crate::review::ReviewFlow`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    /// The file picker holds no file. No request was made.
    #[error("No file selected")]
    NoFileSelected,

    /// Import requested without a successful analysis. No request was made.
    #[error("The file has not been analyzed")]
    NotAnalyzed,

    /// The server answered with `success: false`.
    #[error("Server rejected the request: {0}")]
    ServerRejected(String),

    /// Network or decoding failure.
    #[error("Transport failure: {0}")]
    TransportFailure(#[from] TransportError),

    /// Another operation is in flight, or the session already imported.
    #[error("Another operation is in progress")]
    Busy,
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while loading [`crate::config::PanelConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The embedded JSON could not be parsed.
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range.
    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for review flow operations.
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_converts_into_review_error() {
        let err: ReviewError = TransportError::Request("connection refused".into()).into();
        assert!(matches!(err, ReviewError::TransportFailure(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: TransportError = json_err.into();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn test_config_error_format() {
        let err = ConfigError::Invalid {
            field: "analyze_url",
            message: "must not be empty".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("analyze_url"));
        assert!(msg.contains("must not be empty"));
    }
}
