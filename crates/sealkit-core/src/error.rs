//! Unified application error types for Sealkit.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The supplied key is absent, not valid hex, or not 32 bytes long.
    InvalidKey,
    /// The token string is not valid hex or is too short to contain a nonce.
    MalformedToken,
    /// AEAD integrity verification failed (tampering or wrong key).
    AuthenticationFailed,
    /// The payload decrypted but did not decode into valid claims.
    MalformedClaims,
    /// The token is well-formed but past its validity window.
    TokenExpired,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A configuration error occurred.
    Configuration,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "INVALID_KEY"),
            Self::MalformedToken => write!(f, "MALFORMED_TOKEN"),
            Self::AuthenticationFailed => write!(f, "AUTHENTICATION_FAILED"),
            Self::MalformedClaims => write!(f, "MALFORMED_CLAIMS"),
            Self::TokenExpired => write!(f, "TOKEN_EXPIRED"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Sealkit.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary. Every failure is terminal for the call
/// that produced it; nothing is retried internally and no code path aborts
/// the process on external input.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-key error.
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidKey, message)
    }

    /// Create a malformed-token error.
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedToken, message)
    }

    /// Create an authentication-failed error.
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AuthenticationFailed, message)
    }

    /// Create a malformed-claims error.
    pub fn malformed_claims(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedClaims, message)
    }

    /// Create a token-expired error.
    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenExpired, message)
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_code() {
        let err = AppError::token_expired("token validity window has passed");
        assert_eq!(
            err.to_string(),
            "TOKEN_EXPIRED: token validity window has passed"
        );
    }

    #[test]
    fn test_helper_sets_kind() {
        assert_eq!(AppError::invalid_key("x").kind, ErrorKind::InvalidKey);
        assert_eq!(
            AppError::malformed_token("x").kind,
            ErrorKind::MalformedToken
        );
        assert_eq!(
            AppError::authentication_failed("x").kind,
            ErrorKind::AuthenticationFailed
        );
        assert_eq!(
            AppError::malformed_claims("x").kind,
            ErrorKind::MalformedClaims
        );
    }

    #[test]
    fn test_clone_drops_source() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(inner);
        assert_eq!(err.kind, ErrorKind::Serialization);
        let cloned = err.clone();
        assert!(cloned.source.is_none());
        assert_eq!(cloned.message, err.message);
    }
}
