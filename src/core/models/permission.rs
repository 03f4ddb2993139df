//! Permission model
//!
//! A permission grants one privilege to one role. Permissions attach either to
//! a widget or to the whole task step; the scope only matters when rendering.

use serde::{Deserialize, Serialize};

/// A role/privilege pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionEntry {
    /// Role the privilege is granted to
    pub role_name: String,

    /// Granted privilege
    pub privilege_name: String,
}

impl PermissionEntry {
    /// Create a new permission entry
    #[must_use]
    pub fn new(role_name: impl Into<String>, privilege_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            privilege_name: privilege_name.into(),
        }
    }
}

/// Where a permission list is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionScope {
    /// Permission on a single widget
    #[default]
    Widget,
    /// Permission on the task step as a whole
    State,
}

impl PermissionScope {
    /// Configuration class name used for entries of this scope
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Widget => "ProcessStateWidgetPermission",
            Self::State => "ProcessStatePermission",
        }
    }
}

impl std::fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Widget => write!(f, "widget"),
            Self::State => write!(f, "state"),
        }
    }
}
