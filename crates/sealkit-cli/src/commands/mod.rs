//! CLI command definitions and dispatch.

pub mod mint;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use sealkit_core::config::AppConfig;
use sealkit_core::error::AppError;

/// Sealkit — bearer token minting and validation
#[derive(Debug, Parser)]
#[command(name = "sealkit", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment to load (merges config/{env}.toml over config/default.toml)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mint a new token
    Mint(mint::MintArgs),
    /// Validate a token and print its claims
    Validate(validate::ValidateArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Mint(args) => mint::execute(args, config, self.format),
            Commands::Validate(args) => validate::execute(args, config, self.format),
        }
    }
}

/// Helper: resolve the sealing key from the `--key` flag or configuration.
///
/// The key never has a built-in default; a missing key is a configuration
/// error, not something to paper over.
pub(crate) fn resolve_key(explicit: Option<&str>, config: &AppConfig) -> Result<String, AppError> {
    if let Some(key) = explicit {
        return Ok(key.to_string());
    }

    if config.token.key_hex.is_empty() {
        return Err(AppError::configuration(
            "no key supplied: pass --key or set token.key_hex in configuration",
        ));
    }
    Ok(config.token.key_hex.clone())
}
