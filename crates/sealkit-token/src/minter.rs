//! Token minting with purpose-specific validity windows.

use chrono::Duration;

use sealkit_core::AppResult;

use crate::aead;
use crate::claims::Claims;

/// Access token validity window in minutes.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 15;
/// Refresh token validity window in days.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// Mints sealed access and refresh tokens.
///
/// Stateless: the key is supplied on every call and never retained.
#[derive(Debug, Clone)]
pub struct TokenMinter;

impl TokenMinter {
    /// Creates a new token minter instance.
    pub fn new() -> Self {
        Self
    }

    /// Mints an access token for `subject_id`, valid for 15 minutes.
    pub fn mint_access_token(&self, subject_id: &str, key_hex: &str) -> AppResult<String> {
        self.mint(
            subject_id,
            key_hex,
            Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
        )
    }

    /// Mints a refresh token for `subject_id`, valid for 7 days.
    pub fn mint_refresh_token(&self, subject_id: &str, key_hex: &str) -> AppResult<String> {
        self.mint(subject_id, key_hex, Duration::days(REFRESH_TOKEN_TTL_DAYS))
    }

    /// Builds claims, seals them, and hex-encodes the result.
    ///
    /// Propagates `InvalidKey` and serialization failures; never panics on
    /// any input.
    fn mint(&self, subject_id: &str, key_hex: &str, ttl: Duration) -> AppResult<String> {
        let key = aead::decode_key(key_hex)?;
        let claims = Claims::new(subject_id, ttl);
        let sealed = aead::seal(&claims.to_bytes()?, &key)?;
        Ok(hex::encode(sealed))
    }
}

impl Default for TokenMinter {
    fn default() -> Self {
        Self::new()
    }
}
