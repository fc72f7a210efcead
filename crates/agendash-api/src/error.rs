//! Error types for dashboard API operations.
//!
//! Read failures (fetching the month's events or the task list), write
//! failures (create/update/delete) and the 401 auth case all surface
//! through [`ApiError`]. Form validation never reaches this layer.

use std::fmt;
use thiserror::Error;

/// The category of an API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    /// Network error - connection failed, DNS resolution, etc.
    Network,
    /// The request timed out.
    Timeout,
    /// The server rejected the credentials (401).
    Unauthorized,
    /// Resource not found (404).
    NotFound,
    /// Request was invalid (other 4xx).
    BadRequest,
    /// Server returned an error (5xx).
    Server,
    /// The response body could not be decoded.
    InvalidResponse,
}

impl ApiErrorCode {
    /// Returns true if this error is transient and the operation may be
    /// retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network | Self::Timeout | Self::Server)
    }

    /// Returns a stable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not_found",
            Self::BadRequest => "bad_request",
            Self::Server => "server",
            Self::InvalidResponse => "invalid_response",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error from the dashboard backend or the transport underneath it.
#[derive(Debug, Error)]
pub struct ApiError {
    code: ApiErrorCode,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ApiError {
    /// Creates a new error with the given code and message.
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Network, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Timeout, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Unauthorized, message)
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::NotFound, message)
    }

    /// Creates a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::BadRequest, message)
    }

    /// Creates a server error.
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Server, message)
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::InvalidResponse, message)
    }

    /// Sets the source error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> ApiErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error is transient and may be retried.
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_codes() {
        assert!(ApiErrorCode::Network.is_retryable());
        assert!(ApiErrorCode::Timeout.is_retryable());
        assert!(ApiErrorCode::Server.is_retryable());
        assert!(!ApiErrorCode::Unauthorized.is_retryable());
        assert!(!ApiErrorCode::NotFound.is_retryable());
        assert!(!ApiErrorCode::BadRequest.is_retryable());
    }

    #[test]
    fn error_creation() {
        let err = ApiError::unauthorized("token rejected");
        assert_eq!(err.code(), ApiErrorCode::Unauthorized);
        assert_eq!(err.message(), "token rejected");
        assert!(!err.is_retryable());
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = ApiError::server("boom");
        let display = format!("{}", err);
        assert!(display.contains("server"));
        assert!(display.contains("boom"));
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error;
        let io_err = std::io::Error::other("connection reset");
        let err = ApiError::network("request failed").with_source(io_err);
        assert!(err.source().is_some());
    }
}
