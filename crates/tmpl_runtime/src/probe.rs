//! Probe and convert: narrowing an opaque `Value` to a primitive kind.
//!
//! Each kind has two entry points:
//!
//! - `try_as_*` is strict. It succeeds only when the value already is that
//!   kind, including the matching placeholder sub-kind. It never converts.
//! - `try_convert_*` is loose. It succeeds whenever the strict probe does, or
//!   when one of the cross-kind rules below applies.
//!
//! | Target   | Loose rule                                         |
//! |----------|----------------------------------------------------|
//! | string   | integer → decimal text                             |
//! | integer  | string → base-10 parse                             |
//! | bool     | integer → `n > 0`; string → `true`/`false` (any case) |
//! | datetime | string → deployment stamp, then general date parse |
//!
//! Every function is total and allocation-free on the strict path.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use tmpl_value::{bool_literal, ObjectMap, Placeholder, Value};

use crate::datetime::parse_date_time;

// String

/// Text of a string or a text placeholder.
pub fn try_as_string(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Placeholder(p) => p.as_text(),
        _ => None,
    }
}

/// Text of a string, or the decimal form of an integer.
pub fn try_convert_string(value: &Value) -> Option<Cow<'_, str>> {
    if let Some(s) = try_as_string(value) {
        return Some(Cow::Borrowed(s));
    }
    try_as_integer(value).map(|n| Cow::Owned(n.to_string()))
}

/// Convert a whole argument list to text.
///
/// The first element gates the operation: if it has no text form the result
/// is `None`. Later elements that cannot convert leave an empty string in
/// their slot instead of failing the call.
pub fn try_convert_string_array(values: &[Value]) -> Option<Vec<String>> {
    let (head, rest) = values.split_first()?;
    let Some(head) = try_convert_string(head) else {
        tracing::trace!(type_name = head.type_name(), "first element has no text form");
        return None;
    };

    let mut out = Vec::with_capacity(values.len());
    out.push(head.into_owned());
    out.extend(
        rest.iter()
            .map(|v| try_convert_string(v).map(Cow::into_owned).unwrap_or_default()),
    );
    Some(out)
}

/// Strict text view of every element of an array-like value.
///
/// Elements that are not strings are `None` slots. Fails only when `value`
/// is not array-like.
pub fn try_as_string_array(value: &Value) -> Option<Vec<Option<&str>>> {
    try_as_array(value).map(|items| items.iter().map(try_as_string).collect())
}

/// Capitalized literal (`True`/`False`) of a boolean-like value.
pub fn try_bool_string(value: &Value) -> Option<&'static str> {
    try_as_bool(value).map(bool_literal)
}

// Integer

pub fn try_as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(n) => Some(*n),
        Value::Placeholder(p) => match **p {
            Placeholder::Integer(n) => Some(n),
            _ => None,
        },
        _ => None,
    }
}

pub fn try_convert_integer(value: &Value) -> Option<i64> {
    try_as_integer(value).or_else(|| try_as_string(value).and_then(parse_integer_text))
}

/// Integer that fits in 32 bits, for index-like arguments.
pub fn try_as_int32(value: &Value) -> Option<i32> {
    try_as_integer(value).and_then(|n| i32::try_from(n).ok())
}

pub fn try_convert_int32(value: &Value) -> Option<i32> {
    try_convert_integer(value).and_then(|n| i32::try_from(n).ok())
}

/// Leading/trailing whitespace and a single sign are allowed.
fn parse_integer_text(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

// Boolean

pub fn try_as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Placeholder(p) => match **p {
            Placeholder::Boolean(b) => Some(b),
            _ => None,
        },
        _ => None,
    }
}

pub fn try_convert_bool(value: &Value) -> Option<bool> {
    if let Some(b) = try_as_bool(value) {
        return Some(b);
    }
    if let Some(n) = try_as_integer(value) {
        return Some(n > 0);
    }
    try_as_string(value).and_then(parse_bool_text)
}

fn parse_bool_text(text: &str) -> Option<bool> {
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// DateTime

pub fn try_as_date_time(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::DateTime(dt) => Some(*dt),
        _ => None,
    }
}

pub fn try_convert_date_time(value: &Value) -> Option<DateTime<Utc>> {
    try_as_date_time(value).or_else(|| try_as_string(value).and_then(parse_date_time))
}

// Array and Object

/// Elements of an array or an array placeholder.
pub fn try_as_array(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => Some(items),
        Value::Placeholder(p) => match &**p {
            Placeholder::Array(items) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Arrays have no cross-kind rule; accepts exactly what `try_as_array` does.
pub fn try_convert_array(value: &Value) -> Option<&[Value]> {
    try_as_array(value)
}

/// Properties of an object or an object placeholder.
///
/// Association-like inputs are normalized into `ObjectMap` when the value is
/// built (`Value::object_from_pairs`), so they arrive here as objects.
pub fn try_as_object(value: &Value) -> Option<&ObjectMap> {
    match value {
        Value::Object(map) => Some(map),
        Value::Placeholder(p) => match &**p {
            Placeholder::Object(map) => Some(map),
            _ => None,
        },
        _ => None,
    }
}

/// Objects have no cross-kind rule; accepts exactly what `try_as_object` does.
pub fn try_convert_object(value: &Value) -> Option<&ObjectMap> {
    try_as_object(value)
}
