//! Flattening of selected nodes into textual leaves.
//!
//! Arrays are recursed all the way down; objects contribute each member
//! value once, rendered as a whole. A member whose value is itself an object
//! or an array therefore becomes one opaque string such as `{"b":1}`.

use serde_json::Value;

/// Flatten selected nodes into a sorted list of textual leaves.
///
/// Never fails: every JSON value has a textual rendering.
///
/// ```
/// use apidiff_core::compare::flatten;
/// use serde_json::json;
///
/// let nested = json!([[1, 2], [3]]);
/// assert_eq!(flatten([&nested]), vec!["1", "2", "3"]);
///
/// let object = json!({"a": {"b": 1}});
/// assert_eq!(flatten([&object]), vec![r#"{"b":1}"#]);
/// ```
pub fn flatten<'a, I>(nodes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut leaves = Vec::new();
    for node in nodes {
        flatten_into(node, &mut leaves);
    }
    leaves.sort();
    leaves
}

fn flatten_into(node: &Value, leaves: &mut Vec<String>) {
    match node {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, leaves);
            }
        }
        // one level only
        Value::Object(members) => leaves.extend(members.values().map(render)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            leaves.push(render(node))
        }
    }
}

/// Render one value as a leaf: strings verbatim, everything else as compact
/// JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
