//! Token codec configuration.

use serde::{Deserialize, Serialize};

/// Token codec configuration.
///
/// The key is handed to the codec per call; this section only gives the
/// CLI a place to keep it outside of shell history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Hex-encoded 256-bit key for sealing and opening tokens
    /// (64 hexadecimal characters).
    #[serde(default)]
    pub key_hex: String,
}
