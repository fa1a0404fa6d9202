//! Validate command
//!
//! Usage: apidiff validate <CONFIG>

use super::Outcome;
use crate::config::load_config;
use apidiff_core::errors::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the YAML config file
    pub config: PathBuf,
}

/// Load and validate the config without contacting either endpoint
///
/// # Errors
///
/// Any config loading or validation error.
pub fn execute(args: ValidateArgs) -> Result<Outcome> {
    let config = load_config(&args.config)?;

    println!("✓ Config is valid: {}", args.config.display());
    println!("  left:    {} ({})", config.left.url, config.left.path);
    println!("  right:   {} ({})", config.right.url, config.right.path);
    println!("  timeout: {}s", config.timeout.as_secs());

    Ok(Outcome::Success)
}
