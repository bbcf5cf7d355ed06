//! Token validation CLI command.

use clap::Args;

use crate::commands::resolve_key;
use crate::output::{self, OutputFormat};
use sealkit_core::config::AppConfig;
use sealkit_core::error::AppError;
use sealkit_token::TokenValidator;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Token string to validate
    pub token: String,

    /// Hex-encoded 256-bit key (overrides configuration)
    #[arg(short, long)]
    pub key: Option<String>,
}

/// Execute the validate command
pub fn execute(
    args: &ValidateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let key_hex = resolve_key(args.key.as_deref(), config)?;

    let claims = TokenValidator::new().validate_token(&args.token, &key_hex)?;

    match format {
        OutputFormat::Table => {
            output::print_success("Token is valid");
            output::print_kv("Subject", &claims.subject_id);
            output::print_kv(
                "Issued at",
                &claims
                    .issued_at_utc()
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string(),
            );
            output::print_kv(
                "Expires at",
                &claims
                    .expires_at_utc()
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string(),
            );
            output::print_kv("Remaining", &format!("{}s", claims.remaining_ttl_seconds()));
        }
        OutputFormat::Json => {
            output::print_item(&claims, format);
        }
    }

    Ok(())
}
