//! Tests for XML rendering
//!
//! Covers the engine task fragment and the widget configuration document,
//! including empty-collection suppression and idempotence.

use serde_json::json;
use stepconf::core::services::{render_task_xml, render_widget_xml};
use stepconf::xml::RenderOptions;

use super::common::{b64, compact, ingest, ingest_with, step_conf, task_json, transition};

// =============================================================================
// Engine Task Fragment
// =============================================================================

#[test]
fn test_task_fragment_with_transitions() {
    let task = ingest_with(
        &task_json("Review", &step_conf("bob", &json!([]))),
        vec![transition("end"), transition("reject")],
    );
    assert_eq!(
        render_task_xml(&task, &compact()).unwrap(),
        "<task assignee=\"bob\" name=\"Review\" g=\"100,50,100,80\">\
         <transition name=\"to end\" to=\"end\"/>\
         <transition name=\"to reject\" to=\"reject\"/>\
         </task>"
    );
}

#[test]
fn test_task_fragment_candidate_groups() {
    let conf = json!({"candidate_groups": "clerks", "widgetId": "root", "priority": 0});
    let task = ingest(&task_json("Review", &conf));
    let xml = render_task_xml(&task, &compact()).unwrap();
    assert!(xml.starts_with("<task candidate-groups=\"clerks\" name=\"Review\""));
    assert!(!xml.contains("assignee="));
}

#[test]
fn test_task_fragment_without_payload_has_no_assignment() {
    let json = json!({"properties": {"name": "Plain"}});
    let task = ingest(&json);
    assert_eq!(render_task_xml(&task, &compact()).unwrap(), "<task name=\"Plain\" g=\"0,0,0,0\"/>");
}

#[test]
fn test_task_name_is_escaped() {
    let json = json!({"properties": {"name": "Q&A \"final\""}});
    let task = ingest(&json);
    assert!(render_task_xml(&task, &compact()).unwrap().contains("name=\"Q&amp;A &quot;final&quot;\""));
}

#[test]
fn test_task_fragment_default_layout() {
    let task = ingest_with(&task_json("Review", &step_conf("bob", &json!([]))), vec![transition("end")]);
    assert_eq!(
        render_task_xml(&task, &RenderOptions::default()).unwrap(),
        "<task assignee=\"bob\" name=\"Review\" g=\"100,50,100,80\">\n\
         <transition name=\"to end\" to=\"end\"/>\n\
         </task>\n"
    );
}

// =============================================================================
// Widget Configuration
// =============================================================================

#[test]
fn test_widget_configuration_full_document() {
    let conf = json!({
        "assignee": "bob",
        "widgetId": "root",
        "priority": 0,
        "permissions": [{"roleName": "clerk", "privilegeName": "EDIT"}],
        "properties": {"title": b64("Invoice")},
        "step-permissions": [{"roleName": "auditor", "privilegeName": "VIEW"}],
        "children": [{
            "widgetId": "section",
            "priority": 1,
            "children": [{"widgetId": "field", "priority": 2, "properties": {"label": b64("Amount")}}]
        }]
    });
    let task = ingest_with(&task_json("Review", &conf), vec![transition("end")]);

    assert_eq!(
        render_widget_xml(&task, &compact()).unwrap(),
        "<config.ProcessStateConfiguration description=\"Review step\" name=\"Review\" commentary=\"Look at the documents\">\
         <widgets>\
         <permissions><config.ProcessStateWidgetPermission privilegeName=\"EDIT\" roleName=\"clerk\"/></permissions>\
         <attributes><config.ProcessStateWidgetAttribute name=\"title\" value=\"Invoice\"/></attributes>\
         <config.ProcessStateWidget className=\"section\" priority=\"1\">\
         <children>\
         <config.ProcessStateWidget className=\"field\" priority=\"2\">\
         <attributes><config.ProcessStateWidgetAttribute name=\"label\" value=\"Amount\"/></attributes>\
         </config.ProcessStateWidget>\
         </children>\
         </config.ProcessStateWidget>\
         </widgets>\
         <actions><config.ProcessStateAction bpmName=\"end\"/></actions>\
         <permissions><config.ProcessStatePermission privilegeName=\"VIEW\" roleName=\"auditor\"/></permissions>\
         </config.ProcessStateConfiguration>"
    );
}

#[test]
fn test_empty_collections_are_suppressed() {
    let task = ingest(&task_json("Review", &step_conf("bob", &json!([{"widgetId": "w", "priority": 1}]))));
    let xml = render_widget_xml(&task, &compact()).unwrap();
    assert!(!xml.contains("<attributes>"));
    assert!(!xml.contains("<permissions>"));
    assert!(!xml.contains("<actions>"));
    assert!(!xml.contains("<children>"));
}

#[test]
fn test_actions_follow_transition_order() {
    let task = ingest_with(
        &task_json("Review", &step_conf("bob", &json!([]))),
        vec![transition("b"), transition("a"), transition("c")],
    );
    let xml = render_widget_xml(&task, &compact()).unwrap();
    let positions: Vec<usize> = ["\"b\"", "\"a\"", "\"c\""]
        .iter()
        .map(|needle| xml.find(&format!("bpmName={needle}")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_widget_configuration_requires_root_widget() {
    let task = ingest(&json!({"properties": {"name": "Plain"}}));
    let err = render_widget_xml(&task, &compact()).unwrap_err();
    assert!(err.is_rendering());
    assert_eq!(err.task, "Plain");
}

#[test]
fn test_malformed_base64_fails_rendering() {
    let conf = json!({
        "assignee": "bob",
        "widgetId": "root",
        "priority": 0,
        "children": [{"widgetId": "w", "priority": 1, "properties": {"label": "%%%"}}]
    });
    let task = ingest(&task_json("Review", &conf));
    let err = render_widget_xml(&task, &compact()).unwrap_err();
    assert!(err.is_rendering());
    assert!(err.to_string().contains("attribute `label` is not valid base64"));
}

#[test]
fn test_rendering_is_idempotent() {
    let conf = json!({
        "assignee": "bob",
        "widgetId": "root",
        "priority": 0,
        "properties": {"z": b64("last"), "a": b64("<first>"), "m": b64("middle")},
        "children": [{"widgetId": "w", "priority": 1}]
    });
    let task = ingest_with(&task_json("Review", &conf), vec![transition("end")]);
    let options = RenderOptions::default();

    assert_eq!(render_task_xml(&task, &options).unwrap(), render_task_xml(&task, &options).unwrap());
    assert_eq!(
        render_widget_xml(&task, &options).unwrap(),
        render_widget_xml(&task, &options).unwrap()
    );
}
