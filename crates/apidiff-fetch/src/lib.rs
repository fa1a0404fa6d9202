//! apidiff Fetch - HTTP retrieval of the documents to compare
//!
//! Issues a GET per endpoint, requires `200 OK`, and decodes the body as
//! JSON. Failures are reported as [`FetchError`] and convert into the
//! canonical [`apidiff_core::ExError`].

pub mod client;
pub mod errors;
pub mod request;

pub use client::{fetch_pair, HttpClient, DEFAULT_TIMEOUT};
pub use errors::FetchError;
pub use request::{merge_headers, EndpointRequest, HeaderMap};
pub use reqwest::Url;
