//! Convert a user task into XML

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use stepconf::config::Config;
use stepconf::core::models::{OutgoingTransitions, UserTaskConfig};
use stepconf::core::services::{render_task_xml, render_widget_xml};
use stepconf::output::{ConvertResult, OutputMode};

use super::read_task_json;

/// Arguments of the convert command
#[derive(Debug)]
pub struct ConvertArgs {
    /// Task JSON file ("-" for stdin)
    pub input: String,
    /// Transitions JSON file
    pub transitions: Option<PathBuf>,
    /// Output file for the task fragment
    pub task_out: Option<PathBuf>,
    /// Output file for the widget configuration
    pub widgets_out: Option<PathBuf>,
}

/// Convert a task and print or write both XML documents
pub fn convert(args: &ConvertArgs, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let json = read_task_json(&args.input)?;
    let outgoing = match &args.transitions {
        Some(path) => load_transitions(path)?,
        None => OutgoingTransitions::new(),
    };

    let task = UserTaskConfig::from_json(&json, outgoing)?;
    let task_xml = render_task_xml(&task, &config.render)?;
    let widget_xml = if task.step().is_some() {
        Some(render_widget_xml(&task, &config.render)?)
    } else {
        info!("user task '{}' has no step configuration, skipping widget XML", task.name());
        None
    };

    let mut written = Vec::new();
    if let Some(path) = &args.task_out {
        write_output(path, &task_xml)?;
        written.push(path.display().to_string());
    }
    if let (Some(path), Some(xml)) = (&args.widgets_out, &widget_xml) {
        write_output(path, xml)?;
        written.push(path.display().to_string());
    }

    let result = ConvertResult {
        task: task.name().to_string(),
        task_xml,
        widget_xml,
        written,
    };
    result.render(mode);
    Ok(())
}

fn load_transitions(path: &Path) -> anyhow::Result<OutgoingTransitions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read transitions file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid transitions file {}", path.display()))
}

fn write_output(path: &Path, xml: &str) -> anyhow::Result<()> {
    fs::write(path, xml).with_context(|| format!("Failed to write {}", path.display()))
}
