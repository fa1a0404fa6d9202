//! Extraction and set-diff engine.
//!
//! Selects nodes from two decoded JSON documents with JSONPath, flattens
//! them into textual leaves and compares the two leaf sets.
//!
//! ## Entry point
//!
//! ```
//! use apidiff_core::compare::{ComparisonEngine, ComparisonSide, PathExpression};
//! use serde_json::json;
//!
//! let path = PathExpression::parse("$[*].title")?;
//! let staging = json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]);
//! let production = json!([{"title": "B"}, {"title": "A"}]);
//!
//! let result = ComparisonEngine::new().compare(
//!     ComparisonSide::new("staging", &staging, &path),
//!     ComparisonSide::new("production", &production, &path),
//! )?;
//! assert!(result.is_equivalent);
//! # Ok::<(), apidiff_core::ExError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: flattened output and every result set are sorted, so
//!   identical inputs produce byte-identical results regardless of object
//!   member order.
//! - **Set semantics**: duplicate leaves collapse; positions and keys are
//!   discarded.
//! - **No I/O**: the engine only emits `tracing` events.

pub mod differ;
pub mod engine;
pub mod flatten;
pub mod model;
pub mod path;

pub use differ::{diff, SetDiff};
pub use engine::{ComparisonEngine, ComparisonSide};
pub use flatten::flatten;
pub use model::ComparisonResult;
pub use path::{JsonPathSelector, PathExpression, PathSelector};
