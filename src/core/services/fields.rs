//! Typed field access on editor JSON
//!
//! Every accessor takes the location of the enclosing object so errors can
//! point at the offending field, e.g. `children[2].children[0].priority`.

use serde_json::{Map, Value};

use crate::error::InputError;

/// Location of `key` inside the object at `base`
pub fn field_location(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

/// Location of element `index` of the array at `base`
pub fn index_location(base: &str, index: usize) -> String {
    format!("{base}[{index}]")
}

/// Require `value` to be an object
pub fn as_object<'a>(value: &'a Value, location: &str) -> Result<&'a Map<String, Value>, InputError> {
    value.as_object().ok_or_else(|| InputError::WrongType {
        location: location.to_string(),
        expected: "an object",
    })
}

/// A field that may be absent; JSON `null` counts as absent
pub fn optional<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|v| !v.is_null())
}

/// A required string field
pub fn required_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    base: &str,
) -> Result<&'a str, InputError> {
    let value = optional(object, key).ok_or_else(|| InputError::MissingField {
        location: field_location(base, key),
    })?;
    value.as_str().ok_or_else(|| InputError::WrongType {
        location: field_location(base, key),
        expected: "a string",
    })
}

/// An optional string field
pub fn optional_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    base: &str,
) -> Result<Option<&'a str>, InputError> {
    optional(object, key)
        .map(|value| {
            value.as_str().ok_or_else(|| InputError::WrongType {
                location: field_location(base, key),
                expected: "a string",
            })
        })
        .transpose()
}

/// A required 32-bit integer field
pub fn required_i32(object: &Map<String, Value>, key: &str, base: &str) -> Result<i32, InputError> {
    let value = optional(object, key).ok_or_else(|| InputError::MissingField {
        location: field_location(base, key),
    })?;
    let n = value.as_i64().ok_or_else(|| InputError::WrongType {
        location: field_location(base, key),
        expected: "an integer",
    })?;
    i32::try_from(n).map_err(|_| InputError::OutOfRange {
        location: field_location(base, key),
        value: n,
    })
}

/// An optional integer field, zero when absent
pub fn optional_i64(object: &Map<String, Value>, key: &str, base: &str) -> Result<i64, InputError> {
    optional(object, key)
        .map_or(Ok(0), |value| {
            value.as_i64().ok_or_else(|| InputError::WrongType {
                location: field_location(base, key),
                expected: "an integer",
            })
        })
}

/// An optional array; absent or `null` yields an empty slice
pub fn optional_array<'a>(value: Option<&'a Value>, location: &str) -> Result<&'a [Value], InputError> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(InputError::WrongType {
            location: location.to_string(),
            expected: "an array",
        }),
    }
}

/// An optional object; absent or `null` yields `None`
pub fn optional_object<'a>(
    value: Option<&'a Value>,
    location: &str,
) -> Result<Option<&'a Map<String, Value>>, InputError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(InputError::WrongType {
            location: location.to_string(),
            expected: "an object",
        }),
    }
}
