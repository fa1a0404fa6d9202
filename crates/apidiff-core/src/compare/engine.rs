//! Comparison engine.
//!
//! The entry point is [`ComparisonEngine::compare`], which extracts and
//! flattens each side independently, then diffs the two flattened
//! collections into a [`ComparisonResult`].

use crate::compare::differ::diff;
use crate::compare::flatten::flatten;
use crate::compare::model::ComparisonResult;
use crate::compare::path::{JsonPathSelector, PathExpression, PathSelector};
use crate::errors::{ExError, Side};
use crate::{log_op_end, log_op_error, log_op_start};
use serde_json::Value;
use std::time::Instant;

/// One side of a comparison: where the document came from, the document
/// itself and the projection to apply to it.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonSide<'a> {
    pub label: &'a str,
    pub root: &'a Value,
    pub path: &'a PathExpression,
}

impl<'a> ComparisonSide<'a> {
    pub fn new(label: &'a str, root: &'a Value, path: &'a PathExpression) -> Self {
        Self { label, root, path }
    }
}

/// Runs selection, flattening and set-diffing for a pair of documents.
///
/// Holds no mutable state; one engine can serve concurrent comparisons.
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine<S = JsonPathSelector> {
    selector: S,
}

impl ComparisonEngine<JsonPathSelector> {
    /// Engine using the standard JSONPath selector
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: PathSelector> ComparisonEngine<S> {
    /// Engine using a custom selector
    pub fn with_selector(selector: S) -> Self {
        Self { selector }
    }

    /// Select and flatten the values of one side.
    ///
    /// # Errors
    ///
    /// Any selector error, attributed to `side` and the side's path.
    pub fn extract(
        &self,
        side: Side,
        input: &ComparisonSide<'_>,
    ) -> Result<Vec<String>, ExError> {
        let nodes = self
            .selector
            .select(input.root, input.path)
            .map_err(|e| attribute(e, side, input.path))?;
        let values = flatten(nodes.iter().copied());

        tracing::debug!(
            op = "extract",
            side = side.as_str(),
            path = input.path.as_str(),
            selected_len = nodes.len(),
            flat_len = values.len(),
            values = ?values,
            "extracted values"
        );

        Ok(values)
    }

    /// Compare two sides.
    ///
    /// The left side is extracted first; a failure on either side aborts the
    /// comparison without a partial result.
    ///
    /// # Errors
    ///
    /// - `PathEvaluation` (or whatever the selector reports), attributed to
    ///   the failing side
    pub fn compare(
        &self,
        left: ComparisonSide<'_>,
        right: ComparisonSide<'_>,
    ) -> Result<ComparisonResult, ExError> {
        let start = Instant::now();
        log_op_start!(
            "compare",
            left_path = left.path.as_str(),
            right_path = right.path.as_str()
        );

        let outcome = self.compare_sides(&left, &right);
        let duration_ms = start.elapsed().as_millis() as u64;

        match &outcome {
            Ok(result) => {
                log_op_end!(
                    "compare",
                    duration_ms = duration_ms,
                    matched_len = result.matched.len(),
                    only_in_left_len = result.only_in_left.len(),
                    only_in_right_len = result.only_in_right.len(),
                    equivalent = result.is_equivalent
                );
            }
            Err(err) => {
                log_op_error!(
                    "compare",
                    err.clone(),
                    duration_ms = duration_ms,
                    side = err.side().map(|s| s.as_str())
                );
            }
        }

        outcome
    }

    fn compare_sides(
        &self,
        left: &ComparisonSide<'_>,
        right: &ComparisonSide<'_>,
    ) -> Result<ComparisonResult, ExError> {
        let left_values = self.extract(Side::Left, left)?;
        let right_values = self.extract(Side::Right, right)?;

        Ok(ComparisonResult::new(
            left.label,
            left.path.as_str(),
            right.label,
            right.path.as_str(),
            diff(&left_values, &right_values),
        ))
    }
}

fn attribute(err: ExError, side: Side, path: &PathExpression) -> ExError {
    let err = err.with_side(side);
    let err = if err.path().is_none() {
        err.with_path(path.as_str())
    } else {
        err
    };
    if err.op().is_none() {
        err.with_op("select")
    } else {
        err
    }
}
