#![allow(clippy::unwrap_used, clippy::expect_used)]

use apidiff_core::compare::{
    ComparisonEngine, ComparisonSide, JsonPathSelector, PathExpression, PathSelector,
};
use apidiff_core::errors::{ExError, ExErrorKind};
use apidiff_core::logging_facility::test_capture::init_test_capture;
use apidiff_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_FLAT_LEN, FIELD_MATCHED_LEN, FIELD_PATH, FIELD_SELECTED_LEN, FIELD_SIDE,
};
use apidiff_core::{log_op_end, log_op_error, log_op_start};
use serde_json::{json, Value};
use tracing::Level;

struct FailingSelector;

impl PathSelector for FailingSelector {
    fn select<'a>(
        &self,
        _root: &'a Value,
        _expr: &PathExpression,
    ) -> Result<Vec<&'a Value>, ExError> {
        Err(ExError::new(ExErrorKind::PathEvaluation).with_message("boom"))
    }
}

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start = capture.assert_event_exists(op_name, EVENT_START);
    assert_eq!(start.field(FIELD_COMPONENT), Some("logging_facility_tests"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ExError::new(ExErrorKind::Timeout);
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_TIMEOUT"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("Timeout"));
}

#[test]
fn test_compare_emits_start_and_end() {
    let capture = init_test_capture();
    let doc = json!([{"marker": "x"}]);
    let path = PathExpression::parse("$[*].marker_start_end").unwrap();

    ComparisonEngine::new()
        .compare(
            ComparisonSide::new("l", &doc, &path),
            ComparisonSide::new("r", &doc, &path),
        )
        .unwrap();

    let ours = |event: &str| {
        capture.count_events(|e| {
            e.op() == Some("compare")
                && e.event() == Some(event)
                && e.field("left_path") == Some("$[*].marker_start_end")
        })
    };
    assert_eq!(ours(EVENT_START), 1);

    let ends: Vec<_> = capture
        .events_for_op("compare")
        .into_iter()
        .filter(|e| e.event() == Some(EVENT_END))
        .filter(|e| e.field("equivalent") == Some("true"))
        .filter(|e| e.field(FIELD_MATCHED_LEN) == Some("0"))
        .collect();
    assert!(!ends.is_empty());
}

#[test]
fn test_compare_failure_emits_end_error_with_side() {
    let capture = init_test_capture();
    let doc = json!([]);
    let path = PathExpression::parse("$.marker_failure").unwrap();

    let err = ComparisonEngine::with_selector(FailingSelector)
        .compare(
            ComparisonSide::new("l", &doc, &path),
            ComparisonSide::new("r", &doc, &path),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::PathEvaluation);

    let found = capture.count_events(|e| {
        e.op() == Some("compare")
            && e.event() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_PATH_EVALUATION")
            && e.field(FIELD_SIDE) == Some("left")
    });
    assert!(found >= 1, "expected an end_error event attributed to left");
}

#[test]
fn test_extract_emits_debug_counts() {
    let capture = init_test_capture();
    let doc = json!({"marker_counts": [1, 2, 2]});
    let path = PathExpression::parse("$.marker_counts").unwrap();

    let selected = JsonPathSelector.select(&doc, &path).unwrap();
    assert_eq!(selected.len(), 1);

    ComparisonEngine::new()
        .extract(
            apidiff_core::Side::Right,
            &ComparisonSide::new("r", &doc, &path),
        )
        .unwrap();

    let found = capture.count_events(|e| {
        e.op() == Some("extract")
            && e.field(FIELD_PATH) == Some("$.marker_counts")
            && e.field(FIELD_SELECTED_LEN) == Some("1")
            && e.field(FIELD_FLAT_LEN) == Some("3")
            && e.field(FIELD_SIDE) == Some("right")
    });
    assert_eq!(found, 1);
}

#[test]
fn test_extract_lists_values_at_debug() {
    let capture = init_test_capture();
    let doc = json!([{"marker_values": "b"}, {"marker_values": "a"}]);
    let path = PathExpression::parse("$[*].marker_values").unwrap();

    ComparisonEngine::new()
        .extract(
            apidiff_core::Side::Left,
            &ComparisonSide::new("l", &doc, &path),
        )
        .unwrap();

    let events = capture.matching(|e| {
        e.op() == Some("extract") && e.field(FIELD_PATH) == Some("$[*].marker_values")
    });
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(events[0].field("values"), Some(r#"["a", "b"]"#));
}
