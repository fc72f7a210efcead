//! Explicit credential session for the dashboard backend.
//!
//! The session object is constructed once at startup and threaded through
//! every HTTP collaborator, replacing any notion of ambient global
//! credentials. Lifecycle: init with whatever token the environment
//! provides, clear on logout or on the first 401 the backend returns.

use std::sync::RwLock;

/// Holds the bearer token for authenticated requests.
///
/// Interior mutability lets the HTTP client clear the token on a 401
/// while only holding a shared reference.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    /// Creates a session with no credentials.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a session with the given bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Replaces the bearer token.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("session lock poisoned") = Some(token.into());
    }

    /// Clears the credentials (logout, or the backend said 401).
    pub fn clear(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }

    /// Returns the current bearer token, if any.
    pub fn bearer_token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    /// Returns true if the session holds credentials.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }
}
