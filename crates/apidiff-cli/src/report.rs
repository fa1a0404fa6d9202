//! Comparison report rendering
//!
//! Renders a `ComparisonResult` as a human-readable text report or as
//! pretty-printed JSON.

use apidiff_core::errors::Result;
use apidiff_core::ComparisonResult;
use clap::ValueEnum;

const NONE: &str = "(none)";

/// Report format selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Status of one row in the verbose details table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    OnlyInLeft,
    OnlyInRight,
    Mismatch,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::OnlyInLeft => "ONLY IN LEFT",
            RowStatus::OnlyInRight => "ONLY IN RIGHT",
            RowStatus::Mismatch => "MISMATCH",
        }
    }
}

/// One row of the verbose details table.
///
/// Pairs the i-th value found only on the left with the i-th value found
/// only on the right; either may be missing when the lists differ in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow<'a> {
    pub index: usize,
    pub left: Option<&'a str>,
    pub right: Option<&'a str>,
}

impl DetailRow<'_> {
    pub fn status(&self) -> RowStatus {
        match (self.left, self.right) {
            (None, _) => RowStatus::OnlyInRight,
            (_, None) => RowStatus::OnlyInLeft,
            _ => RowStatus::Mismatch,
        }
    }
}

/// Build the details table; indices continue after the matched values
pub fn detail_rows(result: &ComparisonResult) -> Vec<DetailRow<'_>> {
    let mut left = result.only_in_left.iter();
    let mut right = result.only_in_right.iter();
    let offset = result.matched.len();
    let rows = result.only_in_left.len().max(result.only_in_right.len());

    (0..rows)
        .map(|i| DetailRow {
            index: offset + i,
            left: left.next().map(String::as_str),
            right: right.next().map(String::as_str),
        })
        .collect()
}

/// Render in the requested format
///
/// # Errors
///
/// `Serialization` if the JSON form cannot be produced.
pub fn render(result: &ComparisonResult, format: OutputFormat, verbose: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, verbose)),
        OutputFormat::Json => render_json(result),
    }
}

/// Render as pretty-printed JSON
///
/// # Errors
///
/// `Serialization` if serde fails.
pub fn render_json(result: &ComparisonResult) -> Result<String> {
    let mut output = serde_json::to_string_pretty(result)?;
    output.push('\n');
    Ok(output)
}

/// Render the text report
pub fn render_text(result: &ComparisonResult, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str("\n=== REST API Comparison ===\n");
    output.push_str(&format!(
        "Left:  {} ({})\n",
        result.left_source, result.left_path
    ));
    output.push_str(&format!(
        "Right: {} ({})\n",
        result.right_source, result.right_path
    ));
    output.push_str("\nResults:\n");
    output.push_str(&format!("  Matched: {} items\n", result.matched.len()));

    if verbose {
        render_details(&mut output, result);
        if !result.only_in_left.is_empty() {
            output.push_str(&format!(
                "  Only in Left: {} items\n",
                result.only_in_left.len()
            ));
        }
        if !result.only_in_right.is_empty() {
            output.push_str(&format!(
                "  Only in Right: {} items\n",
                result.only_in_right.len()
            ));
        }
    } else {
        render_only_in(&mut output, "Only in Left", result.only_in_left.iter());
        render_only_in(&mut output, "Only in Right", result.only_in_right.iter());
    }

    let status = if result.is_equivalent {
        "MATCH"
    } else {
        "MISMATCH"
    };
    output.push_str(&format!("\nComparison Status: {}\n", status));

    output
}

fn render_details(output: &mut String, result: &ComparisonResult) {
    output.push_str("\nDetailed comparison:\n");

    if !result.matched.is_empty() {
        output.push_str("  Matched Values (both sides):\n");
        for (i, value) in result.matched.iter().enumerate() {
            output.push_str(&format!("    [{:3}] MATCH: '{}'\n", i, value));
        }
    }

    let rows = detail_rows(result);
    if rows.is_empty() {
        return;
    }

    output.push_str("\n  Comparison Details:\n");
    for row in rows {
        output.push_str(&format!(
            "    [{:3}] {:<25} <-> {:<25} | {}\n",
            row.index,
            row.left.unwrap_or(NONE),
            row.right.unwrap_or(NONE),
            row.status().as_str()
        ));
    }
}

fn render_only_in<'a>(
    output: &mut String,
    label: &str,
    values: impl ExactSizeIterator<Item = &'a String>,
) {
    if values.len() == 0 {
        return;
    }

    output.push_str(&format!("  {}: {} items\n", label, values.len()));
    for value in values {
        output.push_str(&format!("    - {}\n", value));
    }
}
