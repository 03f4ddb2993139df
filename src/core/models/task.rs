//! User task model
//!
//! A [`UserTaskConfig`] is the validated result of ingesting one user-task
//! node from the process editor. It cannot be built directly: the only way to
//! obtain one is [`UserTaskConfig::from_json`], which either returns a fully
//! valid task or an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PermissionEntry, WidgetNode};
use crate::error::Error;

/// Who a task is assigned to
///
/// Exactly one assignment target is allowed per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Assignment {
    /// A single named user
    Assignee(String),
    /// Roles that may claim the task
    CandidateGroups(String),
    /// Assignment derived from a process swimlane
    Swimlane(String),
}

impl Assignment {
    /// Engine attribute name for this assignment
    #[must_use]
    pub const fn attribute_name(&self) -> &'static str {
        match self {
            Self::Assignee(_) => "assignee",
            Self::CandidateGroups(_) => "candidate-groups",
            Self::Swimlane(_) => "swimlane",
        }
    }

    /// The assigned user, group list or swimlane name
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Assignee(v) | Self::CandidateGroups(v) | Self::Swimlane(v) => v,
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.attribute_name(), self.value())
    }
}

/// Node geometry in the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Bounds {
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Width
    pub width: i64,
    /// Height
    pub height: i64,
}

impl Bounds {
    /// Create bounds from position and size
    #[must_use]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// One outgoing edge, already rendered by the transition serializer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingTransition {
    /// Id of the node the transition leads to
    pub target: String,

    /// Engine `<transition>` fragment, nested inside `<task>`
    pub transition: String,

    /// UI action fragment, nested inside `<actions>`
    pub action: String,
}

impl OutgoingTransition {
    /// Create a transition entry
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        transition: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            transition: transition.into(),
            action: action.into(),
        }
    }
}

/// Outgoing transitions keyed by target, in edge declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<OutgoingTransition>", into = "Vec<OutgoingTransition>")]
pub struct OutgoingTransitions {
    entries: Vec<OutgoingTransition>,
}

impl OutgoingTransitions {
    /// Create an empty set of transitions
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a transition; an existing entry for the same target is replaced in place
    pub fn insert(&mut self, transition: OutgoingTransition) {
        match self.entries.iter_mut().find(|t| t.target == transition.target) {
            Some(existing) => *existing = transition,
            None => self.entries.push(transition),
        }
    }

    /// Look up the transition leading to `target`
    #[must_use]
    pub fn get(&self, target: &str) -> Option<&OutgoingTransition> {
        self.entries.iter().find(|t| t.target == target)
    }

    /// Iterate in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, OutgoingTransition> {
        self.entries.iter()
    }

    /// Number of transitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no transitions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<OutgoingTransition> for OutgoingTransitions {
    fn from_iter<I: IntoIterator<Item = OutgoingTransition>>(iter: I) -> Self {
        let mut transitions = Self::new();
        for t in iter {
            transitions.insert(t);
        }
        transitions
    }
}

impl From<Vec<OutgoingTransition>> for OutgoingTransitions {
    fn from(entries: Vec<OutgoingTransition>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<OutgoingTransitions> for Vec<OutgoingTransition> {
    fn from(transitions: OutgoingTransitions) -> Self {
        transitions.entries
    }
}

impl<'a> IntoIterator for &'a OutgoingTransitions {
    type Item = &'a OutgoingTransition;
    type IntoIter = std::slice::Iter<'a, OutgoingTransition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Everything the step editor payload contributes to a task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepConfig {
    /// Validated assignment target
    pub assignment: Assignment,

    /// Root of the widget tree
    pub root_widget: WidgetNode,

    /// Task-level (state-scoped) permissions
    pub permissions: Vec<PermissionEntry>,
}

/// A validated user task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTaskConfig {
    resource_id: String,
    name: String,
    description: String,
    commentary: String,
    bounds: Bounds,
    step: Option<StepConfig>,
    outgoing: OutgoingTransitions,
}

impl UserTaskConfig {
    /// Ingest one user-task JSON object
    ///
    /// `outgoing` holds the task's outgoing transitions as produced by the
    /// transition serializer.
    pub fn from_json(json: &Value, outgoing: OutgoingTransitions) -> Result<Self, Error> {
        crate::core::services::parse_user_task(json, outgoing)
    }

    pub(crate) const fn new(
        resource_id: String,
        name: String,
        description: String,
        commentary: String,
        bounds: Bounds,
        step: Option<StepConfig>,
        outgoing: OutgoingTransitions,
    ) -> Self {
        Self {
            resource_id,
            name,
            description,
            commentary,
            bounds,
            step,
            outgoing,
        }
    }

    /// Diagram node id
    #[must_use]
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Task name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Task description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Commentary (the diagram's documentation field)
    #[must_use]
    pub fn commentary(&self) -> &str {
        &self.commentary
    }

    /// Node geometry
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Step configuration, if the editor supplied one
    #[must_use]
    pub const fn step(&self) -> Option<&StepConfig> {
        self.step.as_ref()
    }

    /// Assignment target, present whenever a step configuration is
    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        self.step.as_ref().map(|s| &s.assignment)
    }

    /// Root widget, present whenever a step configuration is
    #[must_use]
    pub fn root_widget(&self) -> Option<&WidgetNode> {
        self.step.as_ref().map(|s| &s.root_widget)
    }

    /// Task-level permissions (empty without a step configuration)
    #[must_use]
    pub fn task_permissions(&self) -> &[PermissionEntry] {
        self.step.as_ref().map(|s| s.permissions.as_slice()).unwrap_or_default()
    }

    /// Outgoing transitions in stored order
    #[must_use]
    pub const fn outgoing(&self) -> &OutgoingTransitions {
        &self.outgoing
    }
}
