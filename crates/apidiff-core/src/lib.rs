//! apidiff Core - extraction and set-diff engine
//!
//! This crate provides the pure part of apidiff:
//! - JSONPath selection over decoded `serde_json::Value` documents
//! - Flattening of selected nodes into comparable textual leaves
//! - Deterministic set-difference between two flattened collections
//! - The `ComparisonEngine` that ties the three together per side
//! - The canonical error facility and the structured logging facility
//!
//! Nothing in this crate performs I/O; documents arrive already decoded.

pub mod compare;
pub mod errors;
pub mod logging_facility;

pub use apidiff_core_types::schema;

// Re-export commonly used types
pub use compare::{
    diff, flatten, ComparisonEngine, ComparisonResult, ComparisonSide, JsonPathSelector,
    PathExpression, PathSelector, SetDiff,
};
pub use errors::{ExError, ExErrorKind, Result, Side};
