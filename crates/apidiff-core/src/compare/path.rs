//! Path expressions and node selection.

use crate::errors::{ExError, ExErrorKind};
use serde_json::Value;
use serde_json_path::JsonPath;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A parsed JSONPath query (RFC 9535 dialect).
///
/// Equality and hashing use the source text, so two expressions compare
/// equal exactly when they were parsed from the same string.
#[derive(Debug, Clone)]
pub struct PathExpression {
    source: String,
    compiled: JsonPath,
}

impl PathExpression {
    /// Parse a path expression.
    ///
    /// # Errors
    ///
    /// - `PathSyntax` if the expression is not valid JSONPath
    pub fn parse(source: &str) -> Result<Self, ExError> {
        let compiled = JsonPath::parse(source).map_err(|e| {
            ExError::new(ExErrorKind::PathSyntax)
                .with_op("parse_path")
                .with_path(source)
                .with_message(e.to_string())
        })?;
        Ok(Self {
            source: source.to_string(),
            compiled,
        })
    }

    /// The expression as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled query
    pub fn json_path(&self) -> &JsonPath {
        &self.compiled
    }
}

impl PartialEq for PathExpression {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PathExpression {}

impl Hash for PathExpression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl FromStr for PathExpression {
    type Err = ExError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PathExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Evaluates a path expression against a document.
///
/// Implementations must not mutate the document and must return an empty
/// list, not an error, when nothing matches.
pub trait PathSelector: Send + Sync {
    /// Select the nodes matched by `expr`, in the order the query visits them
    ///
    /// # Errors
    ///
    /// - `PathEvaluation` if the expression cannot be evaluated against `root`
    fn select<'a>(&self, root: &'a Value, expr: &PathExpression)
        -> Result<Vec<&'a Value>, ExError>;
}

/// Selector backed by `serde_json_path`.
///
/// RFC 9535 evaluation is total over any JSON value, so this selector never
/// fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPathSelector;

impl PathSelector for JsonPathSelector {
    fn select<'a>(
        &self,
        root: &'a Value,
        expr: &PathExpression,
    ) -> Result<Vec<&'a Value>, ExError> {
        Ok(expr.json_path().query(root).all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn select<'a>(root: &'a Value, expr: &str) -> Vec<&'a Value> {
        let path = PathExpression::parse(expr).unwrap();
        JsonPathSelector.select(root, &path).unwrap()
    }

    #[test]
    fn test_parse_rejects_malformed_expression() {
        let err = PathExpression::parse("$[*.title").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::PathSyntax);
        assert_eq!(err.path(), Some("$[*.title"));
        assert_eq!(err.op(), Some("parse_path"));
    }

    #[test]
    fn test_parse_requires_root() {
        let err = PathExpression::parse("items[*]").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::PathSyntax);
    }

    #[test]
    fn test_equality_by_source_text() {
        let a = PathExpression::parse("$.items[*].id").unwrap();
        let b: PathExpression = "$.items[*].id".parse().unwrap();
        let c = PathExpression::parse("$.items[*].name").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "$.items[*].id");
    }

    #[test]
    fn test_select_member_across_array() {
        let doc = json!([
            {"id": 1, "title": "A"},
            {"id": 2, "title": "B"},
            {"id": 3}
        ]);
        assert_eq!(select(&doc, "$[*].title"), vec!["A", "B"]);
    }

    #[test]
    fn test_select_index_and_slice() {
        let doc = json!({"items": [10, 20, 30, 40]});
        assert_eq!(select(&doc, "$.items[1]"), vec![20]);
        assert_eq!(select(&doc, "$.items[1:3]"), vec![20, 30]);
        assert_eq!(select(&doc, "$.items[-1]"), vec![40]);
    }

    #[test]
    fn test_select_wildcard_over_object_members() {
        let doc = json!({"a": 1, "b": 2});
        let mut selected: Vec<i64> = select(&doc, "$.*")
            .into_iter()
            .filter_map(Value::as_i64)
            .collect();
        selected.sort();
        assert_eq!(selected, vec![1, 2]);
    }

    #[test]
    fn test_select_no_match_is_empty_not_error() {
        let doc = json!({"items": []});
        assert!(select(&doc, "$.missing[*].title").is_empty());
        assert!(select(&doc, "$.items[*].title").is_empty());
    }

    #[test]
    fn test_select_root_returns_whole_document() {
        let doc = json!({"a": [1, 2]});
        assert_eq!(select(&doc, "$"), vec![&doc]);
    }
}
