//! Claims carried inside access and refresh tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use sealkit_core::{AppError, AppResult};

/// Claims payload sealed into every token.
///
/// Immutable once constructed. A token is never refreshed in place; a new
/// one is minted instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Claims {
    /// Subject — opaque identifier of the principal.
    pub subject_id: String,
    /// Issued-at timestamp (seconds since epoch).
    pub issued_at: i64,
    /// Expiration timestamp (seconds since epoch).
    pub expires_at: i64,
}

impl Claims {
    /// Builds claims for `subject_id` issued now and expiring after `ttl`.
    ///
    /// `expires_at > issued_at` holds for any positive `ttl`.
    pub fn new(subject_id: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            subject_id: subject_id.into(),
            issued_at: now.timestamp(),
            expires_at: (now + ttl).timestamp(),
        }
    }

    /// Canonical byte encoding of the claims, suitable for sealing.
    ///
    /// Cannot fail for well-formed claims, but surfaces an error rather
    /// than aborting if serialization ever does fail.
    pub fn to_bytes(&self) -> AppResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(AppError::from)
    }

    /// Decodes claims from an opened payload.
    ///
    /// Fails with `MalformedClaims` unless the payload decodes into
    /// exactly the three required fields with correct types. This is the
    /// first line of defense against payloads that decrypted successfully
    /// under an unintended schema.
    pub fn from_bytes(bytes: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| AppError::malformed_claims(format!("claims payload did not decode: {e}")))
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.expires_at, 0).unwrap_or_else(|| Utc::now())
    }

    /// Returns the issue time as a `DateTime<Utc>`.
    pub fn issued_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.issued_at, 0).unwrap_or_else(|| Utc::now())
    }

    /// Checks whether this token has expired.
    ///
    /// A token stays valid through its exact expiry second and becomes
    /// invalid strictly after it.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now().timestamp()
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.expires_at - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_expiry_from_ttl() {
        let claims = Claims::new("user-42", Duration::minutes(15));
        assert_eq!(claims.subject_id, "user-42");
        assert_eq!(claims.expires_at - claims.issued_at, 900);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_wire_encoding_uses_camel_case_keys() {
        let claims = Claims {
            subject_id: "user-42".to_string(),
            issued_at: 1_700_000_000,
            expires_at: 1_700_000_900,
        };
        let json = String::from_utf8(claims.to_bytes().expect("serialize")).expect("utf8");
        assert_eq!(
            json,
            r#"{"subjectId":"user-42","issuedAt":1700000000,"expiresAt":1700000900}"#
        );
    }

    #[test]
    fn test_bytes_round_trip() {
        let claims = Claims::new("subject", Duration::days(7));
        let bytes = claims.to_bytes().expect("serialize");
        let parsed = Claims::from_bytes(&bytes).expect("deserialize");
        assert_eq!(parsed, claims);
    }

    #[test]
    fn test_from_bytes_rejects_missing_field() {
        let err = Claims::from_bytes(br#"{"subjectId":"x","issuedAt":1}"#).unwrap_err();
        assert_eq!(err.kind, sealkit_core::error::ErrorKind::MalformedClaims);
    }

    #[test]
    fn test_from_bytes_rejects_wrong_types() {
        let err =
            Claims::from_bytes(br#"{"subjectId":"x","issuedAt":"1","expiresAt":2}"#).unwrap_err();
        assert_eq!(err.kind, sealkit_core::error::ErrorKind::MalformedClaims);
    }

    #[test]
    fn test_from_bytes_rejects_unknown_field() {
        let err = Claims::from_bytes(
            br#"{"subjectId":"x","issuedAt":1,"expiresAt":2,"audience":"other"}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, sealkit_core::error::ErrorKind::MalformedClaims);
    }

    #[test]
    fn test_from_bytes_rejects_non_json() {
        let err = Claims::from_bytes(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert_eq!(err.kind, sealkit_core::error::ErrorKind::MalformedClaims);
    }

    #[test]
    fn test_expiry_is_strict() {
        let now = Utc::now().timestamp();
        let expired = Claims {
            subject_id: "x".to_string(),
            issued_at: now - 100,
            expires_at: now - 1,
        };
        assert!(expired.is_expired());
        assert_eq!(expired.remaining_ttl_seconds(), 0);

        let live = Claims {
            subject_id: "x".to_string(),
            issued_at: now,
            expires_at: now + 60,
        };
        assert!(!live.is_expired());
        assert!(live.remaining_ttl_seconds() > 0);
    }
}
