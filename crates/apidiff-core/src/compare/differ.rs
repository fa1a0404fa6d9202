//! Set difference between two flattened collections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Partition of the distinct values of two collections.
///
/// The three sets are pairwise disjoint and iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDiff {
    /// Values present on both sides
    pub matched: BTreeSet<String>,
    /// Values present only on the left
    pub only_in_left: BTreeSet<String>,
    /// Values present only on the right
    pub only_in_right: BTreeSet<String>,
}

impl SetDiff {
    /// True when neither side has a value the other lacks
    pub fn is_equivalent(&self) -> bool {
        self.only_in_left.is_empty() && self.only_in_right.is_empty()
    }
}

/// Compute the set difference of two flattened collections.
///
/// Duplicates within one side collapse into a single member.
pub fn diff<L, R>(left: L, right: R) -> SetDiff
where
    L: IntoIterator,
    L::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let set_left: BTreeSet<String> = left.into_iter().map(|v| v.as_ref().to_owned()).collect();
    let set_right: BTreeSet<String> = right
        .into_iter()
        .map(|v| v.as_ref().to_owned())
        .collect();

    SetDiff {
        matched: set_left.intersection(&set_right).cloned().collect(),
        only_in_left: set_left.difference(&set_right).cloned().collect(),
        only_in_right: set_right.difference(&set_left).cloned().collect(),
    }
}
