//! Token validation and expiry enforcement.

use sealkit_core::error::ErrorKind;
use sealkit_core::{AppError, AppResult};

use crate::aead;
use crate::claims::Claims;

/// Opens sealed tokens and enforces the expiry invariant.
///
/// Stateless: the key is supplied on every call and never retained.
#[derive(Debug, Clone)]
pub struct TokenValidator;

impl TokenValidator {
    /// Creates a new token validator instance.
    pub fn new() -> Self {
        Self
    }

    /// Validates `token` and returns the recovered claims.
    ///
    /// Checks, in order:
    /// 1. The key hex-decodes to 32 bytes
    /// 2. The token hex-decodes and is long enough to contain a nonce
    /// 3. AEAD verification and decryption succeed
    /// 4. The plaintext decodes into claims
    /// 5. The claims are within their validity window
    ///
    /// Each failure maps to a single terminal error kind; claims are never
    /// returned alongside an error.
    pub fn validate_token(&self, token: &str, key_hex: &str) -> AppResult<Claims> {
        let key = aead::decode_key(key_hex)?;

        let sealed =
            hex::decode(token).map_err(|_| AppError::malformed_token("token is not valid hex"))?;

        let plaintext = aead::open(&sealed, &key).inspect_err(|e| {
            // A wrong key and a tampered token are indistinguishable, and
            // the log line must not hint at either.
            if e.kind == ErrorKind::AuthenticationFailed {
                tracing::debug!("token rejected by authenticated decryption");
            }
        })?;

        let claims = Claims::from_bytes(&plaintext)?;

        if claims.is_expired() {
            return Err(AppError::token_expired("token validity window has passed"));
        }

        Ok(claims)
    }
}

impl Default for TokenValidator {
    fn default() -> Self {
        Self::new()
    }
}
