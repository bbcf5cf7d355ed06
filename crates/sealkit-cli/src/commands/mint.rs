//! Token minting CLI command.

use clap::Args;

use crate::commands::resolve_key;
use crate::output::{self, OutputFormat};
use sealkit_core::config::AppConfig;
use sealkit_core::error::AppError;
use sealkit_token::TokenMinter;

/// Arguments for the mint command
#[derive(Debug, Args)]
pub struct MintArgs {
    /// Subject identifier to embed in the token
    pub subject: String,

    /// Mint a 7-day refresh token instead of a 15-minute access token
    #[arg(long)]
    pub refresh: bool,

    /// Hex-encoded 256-bit key (overrides configuration)
    #[arg(short, long)]
    pub key: Option<String>,
}

/// Execute the mint command
pub fn execute(args: &MintArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let key_hex = resolve_key(args.key.as_deref(), config)?;
    let minter = TokenMinter::new();

    let kind = if args.refresh { "refresh" } else { "access" };
    let token = if args.refresh {
        minter.mint_refresh_token(&args.subject, &key_hex)?
    } else {
        minter.mint_access_token(&args.subject, &key_hex)?
    };

    match format {
        OutputFormat::Table => {
            output::print_success(&format!("Minted {} token for '{}'", kind, args.subject));
            output::print_kv("Token", &token);
        }
        OutputFormat::Json => {
            output::print_item(&serde_json::json!({ "token": token, "type": kind }), format);
        }
    }

    Ok(())
}
