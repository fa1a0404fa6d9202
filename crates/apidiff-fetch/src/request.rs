//! Endpoint request description and header merging

use apidiff_core_types::Sensitive;
use reqwest::Url;
use std::collections::BTreeMap;

/// Header name to (redacted) value
pub type HeaderMap = BTreeMap<String, Sensitive<String>>;

/// A GET request for one side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointRequest {
    pub url: Url,
    pub headers: HeaderMap,
}

impl EndpointRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into(), Sensitive::new(value.into()));
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// Merge general headers with endpoint-specific ones.
///
/// Header names compare ASCII case-insensitively; an endpoint-specific value
/// replaces a general value under any spelling of the same name, and the
/// endpoint's spelling is kept.
pub fn merge_headers(general: &HeaderMap, specific: &HeaderMap) -> HeaderMap {
    let mut merged = general.clone();
    for (name, value) in specific {
        merged.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        merged.insert(name.clone(), value.clone());
    }
    merged
}
