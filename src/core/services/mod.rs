//! Business logic services
//!
//! Pure transformation logic with no I/O.
//!
//! - [`ingest`] - Editor JSON to a validated [`UserTaskConfig`](crate::core::models::UserTaskConfig)
//! - [`assignment`] - Exactly-one assignment validation
//! - [`permissions`] - Permission array extraction
//! - [`tree`] - Recursive widget tree construction
//! - [`render`] - Engine task XML and widget configuration XML

pub mod assignment;
mod fields;
pub mod ingest;
pub mod permissions;
pub mod render;
pub mod tree;

pub use assignment::{resolve_assignment, validate_assignment};
pub use ingest::parse_user_task;
pub use permissions::extract_permissions;
pub use render::{render_task_xml, render_widget_xml};
pub use tree::{build_widget, populate_widget};
