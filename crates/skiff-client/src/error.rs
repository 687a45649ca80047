//! Error taxonomy for API calls.

use thiserror::Error;

/// Convenience alias for endpoint wrapper results.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure modes surfaced by the HTTP client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (connection, TLS,
    /// timeout).
    #[error("request transport failed")]
    Transport {
        /// Underlying transport failure.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("server rejected request: {error_type} ({status_code}): {message}")]
    Api {
        /// HTTP status code of the response.
        status_code: u16,
        /// Machine-readable error class reported by the server.
        error_type: String,
        /// Human-readable description reported by the server.
        message: String,
    },
    /// The response body did not decode into the expected document.
    #[error("failed to decode server response")]
    Decode {
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The request could not be built.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request.
        message: String,
    },
}

impl ApiError {
    pub(crate) fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}
