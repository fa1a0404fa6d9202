//! Compare command
//!
//! Usage: apidiff compare <CONFIG> [--verbose] [--format text|json] [--log-json]

use super::Outcome;
use crate::config::load_config;
use crate::report::{render, OutputFormat};
use apidiff_core::errors::Result;
use apidiff_core::{ComparisonEngine, ComparisonSide};
use apidiff_core_types::RunContext;
use apidiff_fetch::{fetch_pair, HttpClient};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Path to the YAML config file
    pub config: PathBuf,

    /// Show matched values and a side-by-side table of differences
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub log_json: bool,
}

/// Fetch both endpoints, compare them and print the report
///
/// # Errors
///
/// Config, fetch, selection or report serialization errors.
pub fn execute(args: CompareArgs) -> Result<Outcome> {
    let ctx = RunContext::new().with_verbose(args.verbose);
    let config = load_config(&args.config).map_err(|e| e.with_run_id(ctx.run_id.clone()))?;

    let client = HttpClient::new(config.timeout).map_err(apidiff_core::ExError::from)?;

    tracing::info!(
        run_id = %ctx.run_id,
        left = %config.left.url,
        right = %config.right.url,
        timeout_ms = client.timeout().as_millis() as u64,
        "starting comparison"
    );

    let left_request = config.left.request();
    let right_request = config.right.request();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let (left_doc, right_doc) = runtime
        .block_on(fetch_pair(&client, &left_request, &right_request))
        .map_err(|e| e.with_run_id(ctx.run_id.clone()))?;

    let left_label = config.left.url.to_string();
    let right_label = config.right.url.to_string();
    let result = ComparisonEngine::new()
        .compare(
            ComparisonSide::new(&left_label, &left_doc, &config.left.path),
            ComparisonSide::new(&right_label, &right_doc, &config.right.path),
        )
        .map_err(|e| e.with_run_id(ctx.run_id.clone()))?;

    tracing::info!(
        run_id = %ctx.run_id,
        matched = result.matched.len(),
        mismatched = result.mismatch_count(),
        "comparison finished"
    );

    print!("{}", render(&result, args.format, ctx.verbose)?);

    if result.is_equivalent {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::Mismatch)
    }
}
