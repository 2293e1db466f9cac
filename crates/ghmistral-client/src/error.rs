//! Error types for the client library.

use serde::Deserialize;
use thiserror::Error;

/// Error response body returned by the API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// The error detail object from the API.
    pub error: ErrorDetail,
}

/// Detailed error information from the API.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    /// The error message text describing what went wrong.
    pub message: String,
}

/// Errors that can occur when talking to the chat-completions endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network or HTTP request failure.
    ///
    /// DNS resolution, connection failures, socket errors, timeouts.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON serialization or deserialization error.
    ///
    /// Occurs when request/response JSON cannot be encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// API authentication failure (HTTP 401).
    ///
    /// The token is missing, invalid, revoked, or lacks the `models` scope.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Rate limit exceeded (HTTP 429).
    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    /// Client configuration issue, such as an unparsable base URL.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The API rejected the request (4xx other than 401/429).
    #[error("Request failed with status {status}: {message}")]
    RequestError {
        /// HTTP status code.
        status: u16,
        /// Provider error message or raw body.
        message: String,
    },

    /// API service unavailable (5xx errors).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Unexpected or malformed API response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Check if this is an authentication error.
    #[must_use]
    pub const fn is_authentication_error(&self) -> bool {
        matches!(self, Self::AuthenticationError(_))
    }

    /// Maps a non-success HTTP status and its message to an error.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::AuthenticationError(message),
            429 => Self::RateLimitError(message),
            500..=599 => Self::ServiceUnavailable(message),
            _ => Self::RequestError { status, message },
        }
    }
}
