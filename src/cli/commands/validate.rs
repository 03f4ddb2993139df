//! Validate a user task without rendering it

use stepconf::core::models::{OutgoingTransitions, UserTaskConfig, WidgetNode};
use stepconf::output::{OutputMode, ValidateResult};

use super::read_task_json;

/// Ingest a task and report whether it is valid
pub fn validate(input: &str, mode: OutputMode) -> anyhow::Result<()> {
    let json = read_task_json(input)?;

    let result = match UserTaskConfig::from_json(&json, OutgoingTransitions::new()) {
        Ok(task) => ValidateResult {
            task: task.name().to_string(),
            valid: true,
            assignment: task.assignment().map(ToString::to_string),
            widgets: task.root_widget().map_or(0, WidgetNode::count),
            task_permissions: task.task_permissions().len(),
            error: None,
        },
        Err(e) => ValidateResult {
            task: e.task.clone(),
            valid: false,
            assignment: None,
            widgets: 0,
            task_permissions: 0,
            error: Some(e.to_string()),
        },
    };

    result.render(mode);

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}
