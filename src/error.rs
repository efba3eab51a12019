use crate::error_code::ApiErrorKind;
use thiserror::Error;

/// Unified error type for the client.
///
/// API failures carry their [`ApiErrorKind`], the HTTP status and the best readable
/// message that could be extracted from the response body. Everything else is a
/// local failure (network, stream, configuration, argument validation, I/O).
#[derive(Debug, Error)]
pub enum Error {
    #[error("API error: HTTP {status} ({kind}): {message}")]
    Api {
        kind: ApiErrorKind,
        status: u16,
        message: String,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Streaming error: {message}")]
    Stream { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            kind: ApiErrorKind::from_http_status(status),
            status,
            message: message.into(),
        }
    }

    pub fn stream(msg: impl Into<String>) -> Self {
        Error::Stream {
            message: msg.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation {
            message: msg.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode {
            message: msg.into(),
        }
    }

    /// The API error kind, if this error came from a non-2xx response.
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The HTTP status code, if this error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Hint for callers deciding whether to try again. Never acted on internally.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api { kind, status, .. } => {
                kind.retryable() || (*kind == ApiErrorKind::Other && (500..=599).contains(status))
            }
            Error::Transport(_) | Error::Stream { .. } => true,
            _ => false,
        }
    }
}
