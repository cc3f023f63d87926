//! Custom error types for the application.
//!
//! - [`FetchError`] - Network and response-validation errors at the API boundary
//! - [`AuthError`] - OAuth/PKCE login flow errors
//!
//! Both are `Clone`: a single fetch outcome is handed to every caller
//! waiting on the same cache entry.

use thiserror::Error;

/// HTTP status the API answers with when the bearer token is invalid or expired.
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// Network/fetch-related errors for API requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent (offline, CORS, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// Token exchange exceeded its timeout
    #[error("Request timed out")]
    Timeout,
    /// Access token rejected by the API
    #[error("Token expired or invalid")]
    Unauthorized,
    /// Any other non-2xx response
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body did not match the expected schema
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Map a non-success HTTP status to its error.
    pub fn from_status(status: u16) -> Self {
        if status == STATUS_UNAUTHORIZED {
            Self::Unauthorized
        } else {
            Self::Http(status)
        }
    }

    /// Whether this failure means the session credential is no longer usable.
    pub fn is_credential_expired(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

/// Errors raised while acquiring an access token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// localStorage not available
    #[error("localStorage not available")]
    StorageUnavailable,
    /// No system randomness for the PKCE verifier
    #[error("random number generator unavailable: {0}")]
    Random(String),
    /// Callback arrived without a stored PKCE verifier
    #[error("no code verifier stored for this login")]
    MissingVerifier,
    /// Could not redirect the browser to the authorize page
    #[error("failed to navigate to authorization page")]
    Navigation,
    /// Authorize or token URL could not be built
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// Token endpoint request failed
    #[error("token exchange failed: {0}")]
    Exchange(#[from] FetchError),
}
