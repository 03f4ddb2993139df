//! Assignment validation
//!
//! A user task must name exactly one assignment target: a single assignee, a
//! swimlane, or a list of candidate groups. Values are trimmed first, so a
//! whitespace-only value counts as empty.

use crate::core::models::Assignment;
use crate::error::AssignmentError;

/// Check that exactly one of the three assignment targets is set
pub fn validate_assignment(
    assignee: Option<&str>,
    swimlane: Option<&str>,
    candidate_groups: Option<&str>,
) -> Result<(), AssignmentError> {
    let filled: Vec<&'static str> = [
        ("assignee", assignee),
        ("swimlane", swimlane),
        ("candidateGroups", candidate_groups),
    ]
    .into_iter()
    .filter(|(_, value)| !trimmed(*value).is_empty())
    .map(|(field, _)| field)
    .collect();

    match filled.len() {
        0 => Err(AssignmentError::Missing),
        1 => Ok(()),
        _ => Err(AssignmentError::Ambiguous { fields: filled }),
    }
}

/// Validate and pick the assignment target
///
/// Precedence when choosing is assignee, then candidate groups, then swimlane;
/// validation has already ruled out more than one being set.
pub fn resolve_assignment(
    assignee: Option<&str>,
    swimlane: Option<&str>,
    candidate_groups: Option<&str>,
) -> Result<Assignment, AssignmentError> {
    validate_assignment(assignee, swimlane, candidate_groups)?;

    let (assignee, swimlane, candidate_groups) =
        (trimmed(assignee), trimmed(swimlane), trimmed(candidate_groups));
    let assignment = if !assignee.is_empty() {
        Assignment::Assignee(assignee.to_string())
    } else if !candidate_groups.is_empty() {
        Assignment::CandidateGroups(candidate_groups.to_string())
    } else {
        Assignment::Swimlane(swimlane.to_string())
    };
    Ok(assignment)
}

fn trimmed(value: Option<&str>) -> &str {
    value.map_or("", str::trim)
}
