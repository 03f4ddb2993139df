//! Widget tree construction
//!
//! Walks the editor's nested `children` arrays and builds one [`WidgetNode`]
//! per JSON object, attaching `properties` as raw attributes and
//! `permissions` as widget-scoped permissions.

use serde_json::{Map, Value};

use super::fields::{
    as_object, field_location, index_location, optional, optional_array, optional_object,
    required_i32, required_str,
};
use super::permissions::extract_permissions;
use crate::core::models::WidgetNode;
use crate::error::InputError;

/// Build a widget from a JSON object carrying `widgetId` and `priority`
///
/// The object's own `children`, `properties` and `permissions` are walked
/// recursively.
pub fn build_widget(object: &Map<String, Value>, location: &str) -> Result<WidgetNode, InputError> {
    let mut widget = WidgetNode::new(
        required_str(object, "widgetId", location)?,
        required_i32(object, "priority", location)?,
    );
    populate_widget(
        &mut widget,
        optional(object, "children"),
        optional(object, "properties"),
        optional(object, "permissions"),
        location,
    )?;
    Ok(widget)
}

/// Fill `target` from the JSON found at one node
///
/// Every `properties` entry becomes an attribute (value kept undecoded),
/// `permissions` become the node's permissions and each element of
/// `children`, in order, becomes a new child node.
pub fn populate_widget(
    target: &mut WidgetNode,
    children: Option<&Value>,
    properties: Option<&Value>,
    permissions: Option<&Value>,
    location: &str,
) -> Result<(), InputError> {
    if let Some(properties) = optional_object(properties, &field_location(location, "properties"))? {
        for (key, value) in properties {
            target.put_attribute(key.clone(), value.clone());
        }
    }

    target.permissions = extract_permissions(permissions, &field_location(location, "permissions"))?;

    let children_location = field_location(location, "children");
    for (i, child) in optional_array(children, &children_location)?.iter().enumerate() {
        let child_location = index_location(&children_location, i);
        let child = build_widget(as_object(child, &child_location)?, &child_location)?;
        target.add_child(child);
    }
    Ok(())
}
