//! User task ingestion
//!
//! Converts one editor JSON task object into a validated [`UserTaskConfig`]
//! through explicit stages:
//!
//! 1. [`read_task_properties`] - name, documentation, description, payload
//! 2. [`read_bounds`] - diagram geometry
//! 3. [`parse_step_payload`] - the `aperte-conf` string, unescaped and parsed
//! 4. [`read_step_config`] - assignment check, step permissions, widget tree
//!
//! Any failure aborts the whole task.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::assignment::resolve_assignment;
use super::fields::{
    as_object, field_location, optional, optional_i64, optional_object, optional_str,
};
use super::permissions::extract_permissions;
use super::tree::build_widget;
use crate::core::models::{Bounds, OutgoingTransitions, StepConfig, UserTaskConfig};
use crate::error::{Error, ErrorKind, InputError, TaskContext};

/// Key of the step editor payload inside `properties`
pub const STEP_PAYLOAD_KEY: &str = "aperte-conf";

/// Plain task fields read from `properties`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskProperties {
    /// Diagram node id
    pub resource_id: String,
    /// Task name
    pub name: String,
    /// Task description
    pub description: String,
    /// Diagram documentation, used as commentary
    pub commentary: String,
    /// Raw step editor payload, if any
    pub payload: Option<String>,
}

/// Ingest one user task
pub fn parse_user_task(json: &Value, outgoing: OutgoingTransitions) -> Result<UserTaskConfig, Error> {
    let label = task_label(json);

    let properties = read_task_properties(json).for_task(&label)?;
    let bounds = read_bounds(json).for_task(&properties.name)?;

    let step = match properties.payload.as_deref() {
        Some(raw) => match parse_step_payload(raw).for_task(&properties.name)? {
            Some(payload) => Some(read_step_config(&payload).for_task(&properties.name)?),
            None => None,
        },
        None => None,
    };

    match &step {
        Some(step) => debug!(
            "user task '{}': {} assigned, {} widget(s), {} task permission(s)",
            properties.name,
            step.assignment,
            step.root_widget.count(),
            step.permissions.len()
        ),
        None => debug!("user task '{}': no step configuration", properties.name),
    }

    Ok(UserTaskConfig::new(
        properties.resource_id,
        properties.name,
        properties.description,
        properties.commentary,
        bounds,
        step,
        outgoing,
    ))
}

/// Read the task's plain fields
///
/// `properties` must be an object. `name`, `documentation` and `description`
/// default to empty when absent.
pub fn read_task_properties(json: &Value) -> Result<TaskProperties, InputError> {
    let task = as_object(json, "task")?;
    let properties = optional(task, "properties").ok_or_else(|| InputError::MissingField {
        location: "properties".to_string(),
    })?;
    let properties = as_object(properties, "properties")?;

    let text = |key: &str| -> Result<String, InputError> {
        Ok(optional_str(properties, key, "properties")?.unwrap_or_default().to_string())
    };

    Ok(TaskProperties {
        resource_id: optional_str(task, "resourceId", "")?.unwrap_or_default().to_string(),
        name: text("name")?,
        description: text("description")?,
        commentary: text("documentation")?,
        payload: optional_str(properties, STEP_PAYLOAD_KEY, "properties")?.map(str::to_string),
    })
}

/// Read `bounds.upperLeft` / `bounds.lowerRight`; absent bounds are all zero
pub fn read_bounds(json: &Value) -> Result<Bounds, InputError> {
    let task = as_object(json, "task")?;
    let Some(bounds) = optional_object(optional(task, "bounds"), "bounds")? else {
        return Ok(Bounds::default());
    };

    let corner = |key: &str| -> Result<(i64, i64), InputError> {
        let location = field_location("bounds", key);
        match optional_object(optional(bounds, key), &location)? {
            Some(point) => Ok((optional_i64(point, "x", &location)?, optional_i64(point, "y", &location)?)),
            None => Ok((0, 0)),
        }
    };
    let (left, top) = corner("upperLeft")?;
    let (right, bottom) = corner("lowerRight")?;

    let extent = |axis: &str, from: i64, to: i64| {
        to.checked_sub(from).ok_or_else(|| InputError::OutOfRange {
            location: field_location("bounds.lowerRight", axis),
            value: to,
        })
    };
    Ok(Bounds::new(left, top, extent("x", left, right)?, extent("y", top, bottom)?))
}

/// Parse the step editor payload
///
/// The editor may deliver the payload XML-escaped, so entities are replaced
/// before parsing. A blank payload means the task has no step configuration.
/// Nesting depth is not limited; deep widget trees grow the stack on demand.
pub fn parse_step_payload(raw: &str) -> Result<Option<Value>, InputError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let text = html_escape::decode_html_entities(raw);
    let mut deserializer = serde_json::Deserializer::from_str(&text);
    deserializer.disable_recursion_limit();
    let payload = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(InputError::InvalidPayload)?;
    deserializer.end().map_err(InputError::InvalidPayload)?;
    as_object(&payload, STEP_PAYLOAD_KEY)?;
    Ok(Some(payload))
}

/// Validate the assignment, then build step permissions and the widget tree
pub fn read_step_config(payload: &Value) -> Result<StepConfig, ErrorKind> {
    let config = as_object(payload, STEP_PAYLOAD_KEY)?;

    let assignment = resolve_assignment(
        optional_str(config, "assignee", "")?,
        optional_str(config, "swimlane", "")?,
        optional_str(config, "candidate_groups", "")?,
    )?;
    let permissions = extract_permissions(optional(config, "step-permissions"), "step-permissions")?;
    let root_widget = build_widget(config, "")?;

    Ok(StepConfig {
        assignment,
        root_widget,
        permissions,
    })
}

fn task_label(json: &Value) -> String {
    let name = json.pointer("/properties/name").and_then(Value::as_str);
    let id = json.get("resourceId").and_then(Value::as_str);
    name.filter(|n| !n.is_empty()).or(id).unwrap_or_default().to_string()
}
