//! Core types shared across apidiff crates
//!
//! This crate provides foundational types used by the comparison core,
//! the fetch layer and the CLI:
//!
//! - **Correlation types**: RunId, RunContext
//! - **Sensitive data**: Sensitive<T> marker for header values and tokens
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RunContext, RunId};
pub use sensitive::Sensitive;
