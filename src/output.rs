//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a convert operation
#[derive(Debug, Serialize)]
pub struct ConvertResult {
    /// Task name
    pub task: String,
    /// Engine task fragment
    pub task_xml: String,
    /// Widget configuration, absent when the task has no step configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_xml: Option<String>,
    /// Files written instead of printing, if any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub written: Vec<String>,
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Task name
    pub task: String,
    /// Whether the task converted cleanly
    pub valid: bool,
    /// Assignment, e.g. `assignee=bob`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<String>,
    /// Widgets in the tree, root included
    pub widgets: usize,
    /// Task-level permissions
    pub task_permissions: usize,
    /// Error message when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.written.is_empty() {
            for path in &self.written {
                println!("Wrote {path}");
            }
            return;
        }

        print!("{}", self.task_xml);
        if let Some(widget_xml) = &self.widget_xml {
            println!();
            print!("{widget_xml}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ValidateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if let Some(error) = &self.error {
            println!("INVALID: {error}");
            return;
        }

        println!("Task '{}' is valid.", self.task);
        match &self.assignment {
            Some(assignment) => {
                println!("  Assignment:       {assignment}");
                println!("  Widgets:          {}", self.widgets);
                println!("  Task permissions: {}", self.task_permissions);
            },
            None => println!("  No step configuration."),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
