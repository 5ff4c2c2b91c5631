//! Response shape validation.
//!
//! Every upstream payload passes through [`validate`] before any field is read, so
//! schema drift on the marketplace side surfaces as [`Error::Shape`] instead of a
//! panic or a silently wrong reply.

use crate::{
    core::http::ParsedBody,
    errors::{Error, Result},
};
use serde_json::{Map, Value};
use std::fmt;

/// Coarse payload shapes the marketplace endpoints return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// JSON array
    Array,
    /// JSON object
    Object,
    /// Plain text body or JSON string
    String,
    /// JSON number
    Number,
    /// JSON boolean
    Bool,
    /// JSON null
    Null,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Array => "array",
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

impl Shape {
    /// Shape of a JSON value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
        }
    }

    /// Shape of a fetched body.
    #[must_use]
    pub const fn of_body(body: &ParsedBody) -> Self {
        match body {
            ParsedBody::Json(value) => Self::of(value),
            ParsedBody::Text(_) => Self::String,
        }
    }
}

/// A body whose shape has been checked.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedBody {
    Array(Vec<Value>),
    Object(Map<String, Value>),
    String(String),
}

/// Checks `body` against `expected`, returning the typed payload or a [`Error::Shape`]
/// carrying the shape that was actually received.
///
/// Only `Array`, `Object` and `String` are meaningful expectations; anything else
/// always fails.
pub fn validate(body: ParsedBody, expected: Shape) -> Result<TypedBody> {
    match expected {
        Shape::Array => expect_array(body).map(TypedBody::Array),
        Shape::Object => expect_object(body).map(TypedBody::Object),
        Shape::String => expect_text(body).map(TypedBody::String),
        Shape::Number | Shape::Bool | Shape::Null => Err(mismatch(expected, &body)),
    }
}

/// Validates an array body and unwraps it.
pub fn expect_array(body: ParsedBody) -> Result<Vec<Value>> {
    match body {
        ParsedBody::Json(Value::Array(items)) => Ok(items),
        other => Err(mismatch(Shape::Array, &other)),
    }
}

/// Validates an object body and unwraps it.
pub fn expect_object(body: ParsedBody) -> Result<Map<String, Value>> {
    match body {
        ParsedBody::Json(Value::Object(map)) => Ok(map),
        other => Err(mismatch(Shape::Object, &other)),
    }
}

/// Validates a text body and unwraps it.
pub fn expect_text(body: ParsedBody) -> Result<String> {
    match body {
        ParsedBody::Json(Value::String(text)) | ParsedBody::Text(text) => Ok(text),
        other => Err(mismatch(Shape::String, &other)),
    }
}

/// Reads `key` from an object and requires it to be an array.
///
/// A missing or `null` key yields an empty list, which the paginated fetchers
/// treat as the last page.
pub fn array_field(map: &Map<String, Value>, key: &str) -> Result<Vec<Value>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(other) => Err(Error::Shape {
            expected: Shape::Array,
            actual: Shape::of(other),
        }),
    }
}

/// First non-empty string among `keys`. Numbers are accepted and rendered as text.
#[must_use]
pub fn str_field(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match map.get(*key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// First numeric value among `keys`. Numeric strings are accepted, since the
/// marketplaces are inconsistent about quoting large amounts.
#[must_use]
pub fn num_field(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| match map.get(*key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// First integral value among `keys`.
#[must_use]
pub fn int_field(map: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|key| match map.get(*key) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn mismatch(expected: Shape, body: &ParsedBody) -> Error {
    Error::Shape {
        expected,
        actual: Shape::of_body(body),
    }
}
