//! Command implementations

mod convert;
mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

pub use convert::{ConvertArgs, convert};
pub use validate::validate;

/// Read and parse a task JSON document from a file, or stdin for "-"
fn read_task_json(input: &str) -> anyhow::Result<Value> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read task from stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(input))
            .with_context(|| format!("Failed to read task file {input}"))?
    };
    serde_json::from_str(&content).with_context(|| format!("Task file {input} is not valid JSON"))
}
