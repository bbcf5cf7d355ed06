//! # sealkit-token
//!
//! Compact, self-contained bearer tokens for the Sealkit platform: a
//! claims payload sealed with ChaCha20-Poly1305 and hex-encoded into an
//! opaque string.
//!
//! ## Modules
//!
//! - `aead` — authenticated encryption over arbitrary byte payloads
//! - `claims` — the payload minted into and recovered from a token
//! - `minter` — claims construction, sealing, and wire encoding
//! - `validator` — token opening and expiry enforcement
//!
//! Every operation takes the key as an explicit argument; no key material
//! is ever stored by this crate.

pub mod aead;
pub mod claims;
pub mod minter;
pub mod validator;

pub use claims::Claims;
pub use minter::TokenMinter;
pub use validator::TokenValidator;
