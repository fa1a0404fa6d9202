//! Comparison output types.
//!
//! Sets are `BTreeSet` so iteration and serialization order are stable.

use crate::compare::differ::SetDiff;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The outcome of comparing two sources under their path expressions.
///
/// `is_equivalent` holds exactly when both `only_in_*` sets are empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Label of the left source (usually its URL)
    pub left_source: String,
    /// Label of the right source
    pub right_source: String,
    /// Path expression applied to the left document
    pub left_path: String,
    /// Path expression applied to the right document
    pub right_path: String,
    /// Values extracted from both sides
    pub matched: BTreeSet<String>,
    /// Values extracted only from the left side
    pub only_in_left: BTreeSet<String>,
    /// Values extracted only from the right side
    pub only_in_right: BTreeSet<String>,
    /// True when neither side has a value the other lacks
    pub is_equivalent: bool,
}

impl ComparisonResult {
    /// Assemble a result from the side identities and their set difference
    pub fn new(
        left_source: impl Into<String>,
        left_path: impl Into<String>,
        right_source: impl Into<String>,
        right_path: impl Into<String>,
        diff: SetDiff,
    ) -> Self {
        let is_equivalent = diff.is_equivalent();
        Self {
            left_source: left_source.into(),
            right_source: right_source.into(),
            left_path: left_path.into(),
            right_path: right_path.into(),
            matched: diff.matched,
            only_in_left: diff.only_in_left,
            only_in_right: diff.only_in_right,
            is_equivalent,
        }
    }

    /// Total number of values present on one side only
    pub fn mismatch_count(&self) -> usize {
        self.only_in_left.len() + self.only_in_right.len()
    }
}
