//! Shared test fixtures and helpers
//!
//! This module provides editor-shaped JSON builders for stepconf tests.

use base64::prelude::*;
use serde_json::{Value, json};
use stepconf::core::models::{OutgoingTransition, OutgoingTransitions, UserTaskConfig};
use stepconf::xml::RenderOptions;

/// Base64-encode an attribute value the way the editor does
pub fn b64(text: &str) -> String {
    BASE64_STANDARD.encode(text)
}

/// A user task object whose `aperte-conf` is the serialized `conf`
pub fn task_json(name: &str, conf: &Value) -> Value {
    json!({
        "resourceId": format!("sid-{name}"),
        "properties": {
            "name": name,
            "documentation": "Look at the documents",
            "description": "Review step",
            "aperte-conf": conf.to_string()
        },
        "bounds": {
            "upperLeft": {"x": 100, "y": 50},
            "lowerRight": {"x": 200, "y": 130}
        }
    })
}

/// A minimal valid step configuration assigned to `assignee`
pub fn step_conf(assignee: &str, children: &Value) -> Value {
    json!({
        "assignee": assignee,
        "widgetId": "root",
        "priority": 0,
        "children": children
    })
}

/// Ingest a task, panicking on failure
pub fn ingest(json: &Value) -> UserTaskConfig {
    UserTaskConfig::from_json(json, OutgoingTransitions::new()).expect("task should be valid")
}

/// Ingest a task with outgoing transitions, panicking on failure
pub fn ingest_with(json: &Value, transitions: Vec<OutgoingTransition>) -> UserTaskConfig {
    UserTaskConfig::from_json(json, transitions.into()).expect("task should be valid")
}

/// A transition to `target` with recognizable fragments
pub fn transition(target: &str) -> OutgoingTransition {
    OutgoingTransition::new(
        target,
        format!("<transition name=\"to {target}\" to=\"{target}\"/>"),
        format!("<config.ProcessStateAction bpmName=\"{target}\"/>"),
    )
}

/// Single-line rendering
pub fn compact() -> RenderOptions {
    RenderOptions::compact()
}
