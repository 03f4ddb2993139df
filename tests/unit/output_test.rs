//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use stepconf::output::{ConvertResult, OutputMode, ValidateResult};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn convert_result_serialization() {
    let result = ConvertResult {
        task: "Review".to_string(),
        task_xml: "<task name=\"Review\" g=\"0,0,0,0\"/>".to_string(),
        widget_xml: None,
        written: vec![],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"task\":\"Review\""));
    assert!(json.contains("task_xml"));
    assert!(!json.contains("widget_xml"));
    assert!(!json.contains("written"));
}

#[test]
fn validate_result_serialization_invalid() {
    let result = ValidateResult {
        task: "Review".to_string(),
        valid: false,
        assignment: None,
        widgets: 0,
        task_permissions: 0,
        error: Some("user task 'Review': invalid task configuration".to_string()),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"valid\":false"));
    assert!(json.contains("\"error\""));
    assert!(!json.contains("\"assignment\""));
}

#[test]
fn validate_result_serialization_valid() {
    let result = ValidateResult {
        task: "Review".to_string(),
        valid: true,
        assignment: Some("assignee=bob".to_string()),
        widgets: 3,
        task_permissions: 1,
        error: None,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"assignment\":\"assignee=bob\""));
    assert!(json.contains("\"widgets\":3"));
}
