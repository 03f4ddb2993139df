//! XML rendering
//!
//! Two independent outputs are produced from a validated [`UserTaskConfig`]:
//!
//! - the engine `<task>` fragment ([`render_task_xml`])
//! - the UI-store widget configuration ([`render_widget_xml`])
//!
//! Renderers build an [`XmlElement`] tree; serialization and escaping happen
//! in one place. Empty collections produce no element at all.

use std::collections::BTreeMap;

use base64::prelude::*;
use log::debug;
use serde_json::Value;

use crate::core::models::{PermissionEntry, PermissionScope, UserTaskConfig, WidgetNode};
use crate::error::{Error, RenderError, TaskContext};
use crate::xml::{RenderOptions, XmlElement, contains_escape_characters};

/// Namespace prefix of UI configuration classes
const CLASS_PREFIX: &str = "config.";

fn class(name: &str) -> String {
    format!("{CLASS_PREFIX}{name}")
}

/// Render the engine task fragment
pub fn render_task_xml(task: &UserTaskConfig, options: &RenderOptions) -> Result<String, Error> {
    task_element(task).to_xml(options).map_err(RenderError::Write).for_task(task.name())
}

/// Render the widget configuration document
///
/// Fails if the task has no step configuration.
pub fn render_widget_xml(task: &UserTaskConfig, options: &RenderOptions) -> Result<String, Error> {
    let element = widget_configuration_element(task).for_task(task.name())?;
    element.to_xml(options).map_err(RenderError::Write).for_task(task.name())
}

/// Build the engine `<task>` element
///
/// Carries the assignment attribute (if any), `name` and the `g` geometry,
/// followed by every outgoing transition fragment in stored order.
#[must_use]
pub fn task_element(task: &UserTaskConfig) -> XmlElement {
    let mut element = XmlElement::new("task");
    if let Some(assignment) = task.assignment() {
        element = element.attr(assignment.attribute_name(), assignment.value());
    }
    element = element.attr("name", task.name()).attr("g", task.bounds());

    for transition in task.outgoing() {
        element = element.raw(transition.transition.as_str());
    }
    element
}

/// Build the `ProcessStateConfiguration` element
pub fn widget_configuration_element(task: &UserTaskConfig) -> Result<XmlElement, RenderError> {
    let step = task.step().ok_or(RenderError::MissingRootWidget)?;
    let root = &step.root_widget;

    let widgets = XmlElement::new("widgets")
        .optional_child(permissions_element(&root.permissions, PermissionScope::Widget))
        .optional_child(attributes_element(&root.attributes)?)
        .children(children_elements(&root.children, false)?);

    let actions = (!task.outgoing().is_empty()).then(|| {
        task.outgoing()
            .iter()
            .fold(XmlElement::new("actions"), |actions, t| actions.raw(t.action.as_str()))
    });

    debug!(
        "rendering widget configuration for '{}': {} widget(s), {} action(s)",
        task.name(),
        root.count(),
        task.outgoing().len()
    );

    Ok(XmlElement::new(class("ProcessStateConfiguration"))
        .attr("description", task.description())
        .attr("name", task.name())
        .attr("commentary", task.commentary())
        .child(widgets)
        .optional_child(actions)
        .optional_child(permissions_element(&step.permissions, PermissionScope::State)))
}

/// Build the `<permissions>` block, or nothing for an empty list
#[must_use]
pub fn permissions_element(permissions: &[PermissionEntry], scope: PermissionScope) -> Option<XmlElement> {
    if permissions.is_empty() {
        return None;
    }
    let name = class(scope.class_name());
    Some(XmlElement::new("permissions").children(permissions.iter().map(|p| {
        XmlElement::new(name.as_str())
            .attr("privilegeName", &p.privilege_name)
            .attr("roleName", &p.role_name)
    })))
}

/// Build the `<attributes>` block, or nothing for an empty map
///
/// Values are base64-decoded. Text containing XML escape characters goes into
/// a CDATA `<value>` child; anything else becomes a `value` attribute.
pub fn attributes_element(
    attributes: &BTreeMap<String, Value>,
) -> Result<Option<XmlElement>, RenderError> {
    if attributes.is_empty() {
        return Ok(None);
    }
    let name = class("ProcessStateWidgetAttribute");
    let mut element = XmlElement::new("attributes");
    for (key, value) in attributes {
        let text = decode_attribute(key, value)?;
        let entry = XmlElement::new(name.as_str()).attr("name", key);
        element.push(if contains_escape_characters(&text) {
            entry.child(XmlElement::new("value").cdata(text))
        } else {
            entry.attr("value", text)
        });
    }
    Ok(Some(element))
}

/// Decode one base64 attribute value to text
pub fn decode_attribute(key: &str, value: &Value) -> Result<String, RenderError> {
    let encoded = value.as_str().ok_or_else(|| RenderError::NonStringAttribute {
        key: key.to_string(),
    })?;
    let bytes = BASE64_STANDARD.decode(encoded).map_err(|source| RenderError::InvalidBase64 {
        key: key.to_string(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| RenderError::InvalidUtf8 {
        key: key.to_string(),
        source,
    })
}

/// Build one `ProcessStateWidget` element per widget
///
/// With `with_children_tag` the elements are wrapped in a single `<children>`
/// element. Nested levels always wrap; the top level does not, since
/// `<widgets>` already groups them.
pub fn children_elements(
    widgets: &[WidgetNode],
    with_children_tag: bool,
) -> Result<Vec<XmlElement>, RenderError> {
    if widgets.is_empty() {
        return Ok(Vec::new());
    }
    let elements = widgets.iter().map(widget_element).collect::<Result<Vec<_>, _>>()?;
    if with_children_tag {
        Ok(vec![XmlElement::new("children").children(elements)])
    } else {
        Ok(elements)
    }
}

fn widget_element(widget: &WidgetNode) -> Result<XmlElement, RenderError> {
    Ok(XmlElement::new(class("ProcessStateWidget"))
        .attr("className", &widget.widget_id)
        .attr("priority", widget.priority)
        .optional_child(permissions_element(&widget.permissions, PermissionScope::Widget))
        .optional_child(attributes_element(&widget.attributes)?)
        .children(children_elements(&widget.children, true)?))
}
