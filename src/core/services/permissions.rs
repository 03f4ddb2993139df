//! Permission extraction
//!
//! Turns an editor array of `{roleName, privilegeName}` objects into
//! [`PermissionEntry`] values, keeping array order and duplicates.

use serde_json::Value;

use super::fields::{as_object, index_location, optional_array, required_str};
use crate::core::models::PermissionEntry;
use crate::error::InputError;

/// Extract permissions from an optional JSON array found at `location`
///
/// Absent or `null` yields an empty list.
pub fn extract_permissions(
    permissions: Option<&Value>,
    location: &str,
) -> Result<Vec<PermissionEntry>, InputError> {
    optional_array(permissions, location)?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let item_location = index_location(location, i);
            let object = as_object(item, &item_location)?;
            Ok(PermissionEntry::new(
                required_str(object, "roleName", &item_location)?,
                required_str(object, "privilegeName", &item_location)?,
            ))
        })
        .collect()
}
