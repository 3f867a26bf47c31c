// Field extraction for untyped (JSON) input.
// Type mismatches surface as InvalidArgument, the same as any other rule.

use serde_json::Value;

use super::errors::{DomainError, DomainResult};

/// Requires `value` to be a JSON object
pub(crate) fn object<'a>(
    value: &'a Value,
    what: &str,
) -> DomainResult<&'a serde_json::Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| DomainError::invalid(format!("{} must be an object.", what)))
}

/// Reads a string field, rejecting missing keys and non-string values
pub(crate) fn text(
    fields: &serde_json::Map<String, Value>,
    key: &str,
    label: &str,
) -> DomainResult<String> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(DomainError::invalid(format!("{} must be a string.", label))),
    }
}

/// Reads an integer field, rejecting floats, strings and missing keys
pub(crate) fn integer(
    fields: &serde_json::Map<String, Value>,
    key: &str,
    label: &str,
) -> DomainResult<i64> {
    fields
        .get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| DomainError::invalid(format!("{} must be an integer.", label)))
}
