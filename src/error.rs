//! Error types for task conversion
//!
//! Every failure is reported as an [`Error`], which names the user task being
//! converted and carries one [`ErrorKind`]. Nothing is downgraded to a warning:
//! a task either converts completely or not at all.

use thiserror::Error;

/// A failed conversion of one user task
#[derive(Debug, Error)]
#[error("user task '{task}': {kind}")]
pub struct Error {
    /// Name of the task being converted (may be empty if the name was unreadable)
    pub task: String,

    /// What went wrong
    pub kind: ErrorKind,
}

impl Error {
    /// Create an error for the named task
    #[must_use]
    pub fn new(task: impl Into<String>, kind: impl Into<ErrorKind>) -> Self {
        Self {
            task: task.into(),
            kind: kind.into(),
        }
    }

    /// What went wrong
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Whether the input JSON was malformed
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedInput(_))
    }

    /// Whether the task's assignment was invalid
    #[must_use]
    pub const fn is_invalid_task_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidTaskConfiguration(_))
    }

    /// Whether rendering failed
    #[must_use]
    pub const fn is_rendering(&self) -> bool {
        matches!(self.kind, ErrorKind::Rendering(_))
    }
}

/// The three failure classes of a conversion
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required JSON field was missing or had the wrong type
    #[error("malformed input: {0}")]
    MalformedInput(#[from] InputError),

    /// Zero or several assignment targets were set
    #[error("invalid task configuration: {0}")]
    InvalidTaskConfiguration(#[from] AssignmentError),

    /// The validated task could not be rendered
    #[error("rendering failed: {0}")]
    Rendering(#[from] RenderError),
}

/// Malformed editor JSON
#[derive(Debug, Error)]
pub enum InputError {
    /// A required field was absent or null
    #[error("missing required field `{location}`")]
    MissingField {
        /// Path of the field, e.g. `children[1].widgetId`
        location: String,
    },

    /// A field was present with the wrong JSON type
    #[error("field `{location}` must be {expected}")]
    WrongType {
        /// Path of the field
        location: String,
        /// Expected JSON type, e.g. "a string"
        expected: &'static str,
    },

    /// An integer field does not fit its target type
    #[error("field `{location}` is out of range: {value}")]
    OutOfRange {
        /// Path of the field
        location: String,
        /// The rejected value
        value: i64,
    },

    /// The step configuration string is not valid JSON
    #[error("step configuration is not valid JSON: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

/// Invalid assignment of a user task
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// None of assignee, swimlane, candidate groups is set
    #[error("fill in assignee, swimlane or candidateGroups")]
    Missing,

    /// More than one of assignee, swimlane, candidate groups is set
    #[error("only one of fields: assignee, swimlane, candidateGroups can be filled (got {})", .fields.join(", "))]
    Ambiguous {
        /// The fields that were filled
        fields: Vec<&'static str>,
    },
}

/// Failure while producing XML
#[derive(Debug, Error)]
pub enum RenderError {
    /// Widget configuration requested for a task without a step configuration
    #[error("task has no widget configuration to render")]
    MissingRootWidget,

    /// An attribute value is not a JSON string
    #[error("attribute `{key}` is not a string")]
    NonStringAttribute {
        /// Attribute name
        key: String,
    },

    /// An attribute value is not valid base64
    #[error("attribute `{key}` is not valid base64: {source}")]
    InvalidBase64 {
        /// Attribute name
        key: String,
        /// Decoder error
        source: base64::DecodeError,
    },

    /// An attribute value does not decode to UTF-8 text
    #[error("attribute `{key}` does not decode to UTF-8 text: {source}")]
    InvalidUtf8 {
        /// Attribute name
        key: String,
        /// Conversion error
        source: std::string::FromUtf8Error,
    },

    /// The XML writer failed
    #[error("failed to write XML: {0}")]
    Write(#[source] std::io::Error),
}

/// Attach a task name to a lower-level error
pub(crate) trait TaskContext<T> {
    /// Wrap the error in an [`Error`] for `task`
    fn for_task(self, task: &str) -> Result<T, Error>;
}

impl<T, E: Into<ErrorKind>> TaskContext<T> for Result<T, E> {
    fn for_task(self, task: &str) -> Result<T, Error> {
        self.map_err(|e| Error::new(task, e))
    }
}
