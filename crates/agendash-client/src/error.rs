//! Client error types.

use std::fmt;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// Backend API error.
    Api(String),
    /// Invalid command-line usage.
    Usage(String),
    /// The submitted event did not validate.
    Validation(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Api(msg) => write!(f, "backend error: {}", msg),
            Self::Usage(msg) => write!(f, "usage error: {}", msg),
            Self::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<agendash_api::ApiError> for ClientError {
    fn from(err: agendash_api::ApiError) -> Self {
        Self::Api(err.to_string())
    }
}

impl From<agendash_panel::ValidationError> for ClientError {
    fn from(err: agendash_panel::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
