//! Authenticated encryption over arbitrary byte payloads.
//!
//! Confidentiality and integrity come from ChaCha20-Poly1305. A sealed
//! payload is `nonce || ciphertext+tag`; the nonce is drawn fresh from the
//! operating system CSPRNG on every seal, so no two seals under the same
//! key share a nonce.

use chacha20poly1305::{
    ChaCha20Poly1305, Key, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};

use sealkit_core::{AppError, AppResult};

/// Key size in bytes (256-bit).
pub const KEY_SIZE: usize = 32;
/// Nonce size in bytes required by ChaCha20-Poly1305.
pub const NONCE_SIZE: usize = 12;
/// Poly1305 authentication tag size in bytes, appended to the ciphertext.
pub const TAG_SIZE: usize = 16;

/// Decodes a caller-supplied hex key into raw key material.
///
/// Fails with `InvalidKey` before any cryptographic operation if the
/// string is not valid hex or does not decode to exactly 32 bytes. A wrong
/// key length is a caller configuration bug, never silently tolerated.
pub fn decode_key(key_hex: &str) -> AppResult<[u8; KEY_SIZE]> {
    let bytes =
        hex::decode(key_hex).map_err(|_| AppError::invalid_key("key is not valid hex"))?;

    if bytes.len() != KEY_SIZE {
        return Err(AppError::invalid_key(format!(
            "key must be {KEY_SIZE} bytes after hex decoding, got {}",
            bytes.len()
        )));
    }

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&bytes);
    Ok(key)
}

/// Seals `plaintext` under `key` and returns `nonce || ciphertext+tag`.
///
/// The nonce comes from `OsRng` on every call. Nonce reuse under the same
/// key breaks the cipher's guarantees, so this function never accepts or
/// derives a caller-controlled nonce.
pub fn seal(plaintext: &[u8], key: &[u8; KEY_SIZE]) -> AppResult<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| AppError::internal("encryption failed"))?;

    let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Opens a sealed payload, verifying integrity before returning plaintext.
///
/// Fails with `MalformedToken` if `sealed` is too short to contain a
/// nonce, and with `AuthenticationFailed` on tag mismatch. Tampered
/// ciphertext and a wrong key are indistinguishable from each other, and
/// the error reveals neither which byte failed nor why.
pub fn open(sealed: &[u8], key: &[u8; KEY_SIZE]) -> AppResult<Vec<u8>> {
    // Length must be validated before slicing; `sealed` is attacker
    // controlled.
    if sealed.len() < NONCE_SIZE {
        return Err(AppError::malformed_token(
            "sealed payload is shorter than the nonce",
        ));
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_SIZE);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| AppError::authentication_failed("payload failed integrity verification"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealkit_core::error::ErrorKind;

    fn test_key() -> [u8; KEY_SIZE] {
        [0x42; KEY_SIZE]
    }

    #[test]
    fn test_seal_open_round_trip() {
        let sealed = seal(b"payload", &test_key()).expect("seal");
        assert_eq!(sealed.len(), NONCE_SIZE + b"payload".len() + TAG_SIZE);

        let opened = open(&sealed, &test_key()).expect("open");
        assert_eq!(opened, b"payload");
    }

    #[test]
    fn test_seal_uses_fresh_nonce() {
        let a = seal(b"payload", &test_key()).expect("seal");
        let b = seal(b"payload", &test_key()).expect("seal");
        assert_ne!(a, b);
        assert_ne!(a[..NONCE_SIZE], b[..NONCE_SIZE]);
    }

    #[test]
    fn test_open_rejects_short_input() {
        let err = open(&[0u8; NONCE_SIZE - 1], &test_key()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedToken);

        let err = open(&[], &test_key()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedToken);
    }

    #[test]
    fn test_open_rejects_tampered_payload() {
        let mut sealed = seal(b"payload", &test_key()).expect("seal");
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;

        let err = open(&sealed, &test_key()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AuthenticationFailed);
    }

    #[test]
    fn test_open_rejects_wrong_key() {
        let sealed = seal(b"payload", &test_key()).expect("seal");
        let err = open(&sealed, &[0x43; KEY_SIZE]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AuthenticationFailed);
    }

    #[test]
    fn test_decode_key_accepts_64_hex_chars() {
        let key_hex = "42".repeat(KEY_SIZE);
        let key = decode_key(&key_hex).expect("decode");
        assert_eq!(key, test_key());
    }

    #[test]
    fn test_decode_key_rejects_bad_input() {
        let err = decode_key("not hex at all").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidKey);

        let err = decode_key(&"42".repeat(16)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidKey);

        let err = decode_key("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidKey);
    }
}
