//! Field-extraction helpers shared by all payload parsers.
//!
//! Every parser in this crate consumes a `serde_json::Value` and needs the
//! same handful of accesses: "this must be an object", "this key must hold a
//! string", "this key may hold a list of id strings". These helpers
//! centralise those accesses so every parse site reports the same precise
//! [`BuildError`] shapes.
//!
//! Absent optional keys and explicit JSON `null` are treated alike: both
//! yield the "absent" value. A key that is present with the wrong type is
//! always a shape error, never silently ignored.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::errors::BuildError;

/// Require `value` to be a JSON object.
pub(crate) fn as_object<'a>(
    value: &'a Value,
    context: &str,
) -> Result<&'a Map<String, Value>, BuildError> {
    value
        .as_object()
        .ok_or_else(|| BuildError::shape(context, "an object"))
}

/// Require `field` to be present and hold a string.
pub(crate) fn req_str<'a>(
    obj: &'a Map<String, Value>,
    context: &str,
    field: &'static str,
) -> Result<&'a str, BuildError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(BuildError::missing_field(context, field)),
        Some(value) => value
            .as_str()
            .ok_or_else(|| BuildError::shape(format!("field '{field}' of {context}"), "a string")),
    }
}

/// Read an optional string field. Absent or `null` yields `None`.
pub(crate) fn opt_str(
    obj: &Map<String, Value>,
    context: &str,
    field: &'static str,
) -> Result<Option<String>, BuildError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| BuildError::shape(format!("field '{field}' of {context}"), "a string")),
    }
}

/// Require `field` to hold an RFC 3339 timestamp string.
pub(crate) fn req_timestamp(
    obj: &Map<String, Value>,
    context: &str,
    field: &'static str,
) -> Result<DateTime<Utc>, BuildError> {
    let raw = req_str(obj, context, field)?;
    parse_timestamp(raw, context, field)
}

/// Read an optional RFC 3339 timestamp field. Absent or `null` yields `None`.
pub(crate) fn opt_timestamp(
    obj: &Map<String, Value>,
    context: &str,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, BuildError> {
    match opt_str(obj, context, field)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw, context, field).map(Some),
    }
}

fn parse_timestamp(
    raw: &str,
    context: &str,
    field: &'static str,
) -> Result<DateTime<Utc>, BuildError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| BuildError::InvalidTimestamp {
            context: context.to_string(),
            field,
            value: raw.to_string(),
        })
}

/// Require `field` to hold an array.
pub(crate) fn req_array<'a>(
    obj: &'a Map<String, Value>,
    context: &str,
    field: &'static str,
) -> Result<&'a [Value], BuildError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(BuildError::missing_field(context, field)),
        Some(value) => value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| BuildError::shape(format!("field '{field}' of {context}"), "an array")),
    }
}

/// Read an optional array of id strings. Absent or `null` yields an empty list.
pub(crate) fn opt_str_array(
    obj: &Map<String, Value>,
    context: &str,
    field: &'static str,
) -> Result<Vec<String>, BuildError> {
    let items = match obj.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value
            .as_array()
            .ok_or_else(|| BuildError::shape(format!("field '{field}' of {context}"), "an array"))?,
    };
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                BuildError::shape(format!("items of '{field}' in {context}"), "a string")
            })
        })
        .collect()
}

/// Require `field` to hold a list of id strings.
pub(crate) fn req_str_array(
    obj: &Map<String, Value>,
    context: &str,
    field: &'static str,
) -> Result<Vec<String>, BuildError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(BuildError::missing_field(context, field)),
        _ => opt_str_array(obj, context, field),
    }
}

/// Read an optional nested object. Absent or `null` yields `None`.
pub(crate) fn opt_object<'a>(
    obj: &'a Map<String, Value>,
    context: &str,
    field: &'static str,
) -> Result<Option<&'a Value>, BuildError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) if value.is_object() => Ok(Some(value)),
        Some(_) => Err(BuildError::shape(
            format!("field '{field}' of {context}"),
            "an object",
        )),
    }
}

/// Require `field` to hold a nested object.
pub(crate) fn req_object<'a>(
    obj: &'a Map<String, Value>,
    context: &str,
    field: &'static str,
) -> Result<&'a Value, BuildError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(BuildError::missing_field(context, field)),
        Some(value) if value.is_object() => Ok(value),
        Some(_) => Err(BuildError::shape(
            format!("field '{field}' of {context}"),
            "an object",
        )),
    }
}
