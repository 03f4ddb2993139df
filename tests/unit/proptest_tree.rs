//! Property-based tests for tree building and permission extraction
//!
//! Uses proptest to verify ordering and counting properties for all inputs.

use proptest::prelude::*;
use serde_json::{Value, json};
use stepconf::core::services::{extract_permissions, render_widget_xml};

use super::common::{compact, ingest, step_conf, task_json};

fn permission_array(pairs: &[(String, String)]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|(role, privilege)| json!({"roleName": role, "privilegeName": privilege}))
            .collect(),
    )
}

proptest! {
    /// N permission objects yield N entries in the same order
    #[test]
    fn permissions_keep_order_and_count(
        pairs in prop::collection::vec(("[a-z]{1,8}", "[A-Z]{1,8}"), 0..20)
    ) {
        let json = permission_array(&pairs);
        let entries = extract_permissions(Some(&json), "permissions").unwrap();
        prop_assert_eq!(entries.len(), pairs.len());
        for (entry, (role, privilege)) in entries.iter().zip(&pairs) {
            prop_assert_eq!(&entry.role_name, role);
            prop_assert_eq!(&entry.privilege_name, privilege);
        }
    }

    /// Rendered widgets appear in the same order as the input children
    #[test]
    fn children_render_in_input_order(
        ids in prop::collection::vec("[a-z]{3,10}", 1..12)
    ) {
        let children: Vec<Value> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| json!({"widgetId": format!("{id}-{i}"), "priority": i}))
            .collect();
        let task = ingest(&task_json("Prop", &step_conf("bob", &Value::Array(children))));

        let root = task.root_widget().unwrap();
        prop_assert_eq!(root.children.len(), ids.len());

        let xml = render_widget_xml(&task, &compact()).unwrap();
        let mut last = 0;
        for (i, id) in ids.iter().enumerate() {
            let needle = format!("className=\"{id}-{i}\"");
            let pos = xml.find(&needle).unwrap();
            prop_assert!(pos >= last);
            last = pos;
        }
    }

    /// Rendering the same task twice gives identical bytes
    #[test]
    fn rendering_is_deterministic(
        keys in prop::collection::btree_set("[a-z]{1,6}", 0..8)
    ) {
        let properties: serde_json::Map<String, Value> = keys
            .iter()
            .map(|k| (k.clone(), Value::from("dmFsdWU=")))
            .collect();
        let conf = json!({
            "assignee": "bob",
            "widgetId": "root",
            "priority": 0,
            "properties": properties
        });
        let task = ingest(&task_json("Prop", &conf));
        let first = render_widget_xml(&task, &compact()).unwrap();
        let second = render_widget_xml(&task, &compact()).unwrap();
        prop_assert_eq!(first, second);
    }
}
