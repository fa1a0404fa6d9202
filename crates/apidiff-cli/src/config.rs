//! Comparison config file
//!
//! Parses the YAML config, applies defaults, and validates it before any
//! request is made.

use apidiff_core::errors::{ExError, ExErrorKind, Result, Side};
use apidiff_core::PathExpression;
use apidiff_core_types::Sensitive;
use apidiff_fetch::{merge_headers, EndpointRequest, HeaderMap, Url, DEFAULT_TIMEOUT};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Config file as written by the user
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub general: GeneralSection,
    #[serde(default, alias = "endpoint1")]
    pub left: Option<EndpointSection>,
    #[serde(default, alias = "endpoint2")]
    pub right: Option<EndpointSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralSection {
    /// Seconds; absent or non-positive means the fetch default
    #[serde(default)]
    pub timeout: Option<i64>,
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EndpointSection {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub jsonpath: Option<String>,
}

/// Validated config for one side
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub url: Url,
    /// General headers merged with this side's own
    pub headers: HeaderMap,
    pub path: PathExpression,
}

impl EndpointConfig {
    pub fn request(&self) -> EndpointRequest {
        EndpointRequest::new(self.url.clone()).with_headers(self.headers.clone())
    }
}

/// Validated config
#[derive(Debug, Clone)]
pub struct Config {
    pub timeout: Duration,
    pub left: EndpointConfig,
    pub right: EndpointConfig,
}

/// Load and validate a config file
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - `InvalidConfig` if it is not valid YAML or misses a required field
/// - `PathSyntax` if a jsonpath does not parse
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("load_config")
            .with_message(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    parse_config_str(&content)
}

/// Parse and validate config text
///
/// # Errors
///
/// See [`load_config`].
pub fn parse_config_str(content: &str) -> Result<Config> {
    let raw: RawConfig = serde_yaml::from_str(content)
        .map_err(|e| invalid_config(&format!("YAML parse error: {}", e)))?;

    validate_config(raw)
}

/// Apply defaults and validate a parsed config.
///
/// Required fields are checked first (both URLs, then both paths) so the
/// first problem reported matches the order a reader scans the file.
fn validate_config(raw: RawConfig) -> Result<Config> {
    let left = raw.left.unwrap_or_default();
    let right = raw.right.unwrap_or_default();

    let left_url = required(left.url.as_deref(), Side::Left, "URL")?;
    let right_url = required(right.url.as_deref(), Side::Right, "URL")?;
    let left_path = required(left.jsonpath.as_deref(), Side::Left, "jsonpath")?;
    let right_path = required(right.jsonpath.as_deref(), Side::Right, "jsonpath")?;

    let general_headers = sensitive_headers(raw.general.headers);

    let left = EndpointConfig {
        url: parse_url(left_url, Side::Left)?,
        headers: merge_headers(&general_headers, &sensitive_headers(left.headers)),
        path: parse_path(left_path, Side::Left)?,
    };
    let right = EndpointConfig {
        url: parse_url(right_url, Side::Right)?,
        headers: merge_headers(&general_headers, &sensitive_headers(right.headers)),
        path: parse_path(right_path, Side::Right)?,
    };

    Ok(Config {
        timeout: timeout_from(raw.general.timeout),
        left,
        right,
    })
}

fn timeout_from(seconds: Option<i64>) -> Duration {
    match seconds {
        Some(s) if s > 0 => Duration::from_secs(s as u64),
        _ => DEFAULT_TIMEOUT,
    }
}

fn required<'a>(value: Option<&'a str>, side: Side, field: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(invalid_config(&format!("{} {} is required", side, field)).with_side(side)),
    }
}

fn parse_url(raw: &str, side: Side) -> Result<Url> {
    Url::parse(raw).map_err(|e| {
        invalid_config(&format!("{} URL '{}' is invalid: {}", side, raw, e)).with_side(side)
    })
}

fn parse_path(raw: &str, side: Side) -> Result<PathExpression> {
    PathExpression::parse(raw).map_err(|e| e.with_side(side))
}

fn sensitive_headers(headers: Option<BTreeMap<String, String>>) -> HeaderMap {
    headers
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name, Sensitive::new(value)))
        .collect()
}

fn invalid_config(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_message(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
general:
  timeout: 5
  headers:
    Accept: application/json
    X-Env: any
left:
  url: https://staging.example.com/todos
  headers:
    X-Env: staging
    Authorization: Bearer left-token
  jsonpath: "$[*].title"
right:
  url: https://prod.example.com/todos
  jsonpath: "$.items[*].title"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config_str(FULL).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.left.url.as_str(), "https://staging.example.com/todos");
        assert_eq!(config.left.path.as_str(), "$[*].title");
        assert_eq!(config.right.path.as_str(), "$.items[*].title");
    }

    #[test]
    fn test_headers_merge_general_then_specific() {
        let config = parse_config_str(FULL).unwrap();

        assert_eq!(config.left.headers["X-Env"].expose(), "staging");
        assert_eq!(config.left.headers["Accept"].expose(), "application/json");
        assert_eq!(
            config.left.headers["Authorization"].expose(),
            "Bearer left-token"
        );

        assert_eq!(config.right.headers["X-Env"].expose(), "any");
        assert!(!config.right.headers.contains_key("Authorization"));
    }

    #[test]
    fn test_header_values_are_redacted_in_debug() {
        let config = parse_config_str(FULL).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("left-token"));
    }

    #[test]
    fn test_endpoint_aliases() {
        let config = parse_config_str(
            r#"
endpoint1:
  url: http://localhost:1/a
  jsonpath: "$.a"
endpoint2:
  url: http://localhost:1/b
  jsonpath: "$.b"
"#,
        )
        .unwrap();
        assert_eq!(config.left.path.as_str(), "$.a");
        assert_eq!(config.right.url.path(), "/b");
    }

    #[test]
    fn test_timeout_defaults() {
        let base = r#"
left: { url: "http://a/", jsonpath: "$" }
right: { url: "http://b/", jsonpath: "$" }
"#;
        let config = parse_config_str(base).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        let config = parse_config_str(&format!("general: {{ timeout: 0 }}\n{}", base)).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        let config = parse_config_str(&format!("general: {{ timeout: -3 }}\n{}", base)).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_missing_url_is_reported_first() {
        let err = parse_config_str(
            r#"
left: { jsonpath: "$" }
right: { jsonpath: "$" }
"#,
        )
        .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        assert_eq!(err.side(), Some(Side::Left));
        assert!(err.message().contains("left URL is required"));
    }

    #[test]
    fn test_missing_right_jsonpath() {
        let err = parse_config_str(
            r#"
left: { url: "http://a/", jsonpath: "$" }
right: { url: "http://b/", jsonpath: "" }
"#,
        )
        .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        assert!(err.message().contains("right jsonpath is required"));
    }

    #[test]
    fn test_missing_section_reports_url() {
        let err = parse_config_str("left: { url: \"http://a/\", jsonpath: \"$\" }\n").unwrap_err();
        assert_eq!(err.side(), Some(Side::Right));
        assert!(err.message().contains("right URL is required"));
    }

    #[test]
    fn test_invalid_url() {
        let err = parse_config_str(
            r#"
left: { url: "not a url", jsonpath: "$" }
right: { url: "http://b/", jsonpath: "$" }
"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        assert!(err.message().contains("not a url"));
    }

    #[test]
    fn test_invalid_jsonpath_is_path_syntax() {
        let err = parse_config_str(
            r#"
left: { url: "http://a/", jsonpath: "$" }
right: { url: "http://b/", jsonpath: "$[?" }
"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::PathSyntax);
        assert_eq!(err.side(), Some(Side::Right));
        assert_eq!(err.path(), Some("$[?"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse_config_str("left: [unclosed").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        assert!(err.message().starts_with("YAML parse error"));
    }

    #[test]
    fn test_load_missing_file_is_io() {
        let err = load_config(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("load_config"));
    }

    #[test]
    fn test_request_carries_url_and_headers() {
        let config = parse_config_str(FULL).unwrap();
        let request = config.left.request();
        assert_eq!(request.url, config.left.url);
        assert_eq!(request.headers.len(), 3);
    }
}
