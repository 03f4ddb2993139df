//! Domain models for stepconf
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`UserTaskConfig`] - A validated user task, ready to render
//! - [`WidgetNode`] - One node of the step's widget tree
//! - [`PermissionEntry`] - A role/privilege pair
//! - [`Assignment`] - Who the task is assigned to

mod permission;
mod task;
mod widget;

pub use permission::{PermissionEntry, PermissionScope};
pub use task::{
    Assignment, Bounds, OutgoingTransition, OutgoingTransitions, StepConfig, UserTaskConfig,
};
pub use widget::WidgetNode;
