//! # sealkit-core
//!
//! Core crate for Sealkit. Contains configuration schemas and the unified
//! error system shared by the token codec and the CLI.
//!
//! This crate has **no** internal dependencies on other Sealkit crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
