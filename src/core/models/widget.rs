//! Widget tree model
//!
//! A widget is one node of a task step's form configuration (a button, a
//! field, a section). Widgets nest: every node owns its children outright.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::PermissionEntry;

/// One node of the widget tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetNode {
    /// Configuration class of the widget
    pub widget_id: String,

    /// Ordering hint among siblings
    pub priority: i32,

    /// Raw attribute values, still base64-encoded as delivered by the editor
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,

    /// Widget-scoped permissions, in input order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<PermissionEntry>,

    /// Child widgets, in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
}

impl WidgetNode {
    /// Create a leaf widget with no attributes, permissions or children
    #[must_use]
    pub fn new(widget_id: impl Into<String>, priority: i32) -> Self {
        Self {
            widget_id: widget_id.into(),
            priority,
            attributes: BTreeMap::new(),
            permissions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value under the same key
    pub fn put_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }

    /// Append a child widget
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Number of widgets in this subtree, including this one
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}
