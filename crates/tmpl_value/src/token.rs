//! Bridge between `Value` and the canonical token tree.
//!
//! The canonical token is `serde_json::Value` with insertion-ordered objects.
//! It is the form used for reporting, serialization and for interpolating
//! arrays and objects as text.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number};

use crate::errors::ValueError;
use crate::stack::ensure_sufficient_stack;
use crate::value::{ObjectMap, Placeholder, Value};

/// Whether `value` is array-like: an array or an array placeholder.
pub fn is_array(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Placeholder(p) => matches!(**p, Placeholder::Array(_)),
        _ => false,
    }
}

/// Whether `value` is object-like: an object or an object placeholder.
pub fn is_object(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Placeholder(p) => matches!(**p, Placeholder::Object(_)),
        _ => false,
    }
}

/// Canonical token for any value.
///
/// Placeholders map to their payload; a text placeholder becomes its path.
/// Booleans stay JSON `true`/`false` here. Only the literal text form
/// (`Display`) capitalizes them.
pub fn to_token(value: &Value) -> serde_json::Value {
    ensure_sufficient_stack(|| match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(n) => serde_json::Value::Number(Number::from(*n)),
        Value::String(s) => serde_json::Value::String(String::clone(s)),
        Value::DateTime(dt) => serde_json::Value::String(format_date_time(dt)),
        Value::Array(items) => items_token(items),
        Value::Object(map) => map_token(map),
        Value::Placeholder(p) => match &**p {
            Placeholder::Text { path } => serde_json::Value::String(path.clone()),
            Placeholder::Integer(n) => serde_json::Value::Number(Number::from(*n)),
            Placeholder::Boolean(b) => serde_json::Value::Bool(*b),
            Placeholder::Array(items) => items_token(items),
            Placeholder::Object(map) => map_token(map),
        },
    })
}

fn items_token(items: &[Value]) -> serde_json::Value {
    serde_json::Value::Array(items.iter().map(to_token).collect())
}

fn map_token(map: &ObjectMap) -> serde_json::Value {
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        out.insert(key.clone(), to_token(value));
    }
    serde_json::Value::Object(out)
}

/// RFC 3339 in UTC with a `Z` suffix; fractional seconds only when present.
pub(crate) fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(token: serde_json::Value) -> Result<Self, Self::Error> {
        ensure_sufficient_stack(|| {
            Ok(match token {
                serde_json::Value::Null => Value::Null,
                serde_json::Value::Bool(b) => Value::Boolean(b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => Value::Integer(i),
                    None => return Err(ValueError::NonIntegerNumber(n.to_string())),
                },
                serde_json::Value::String(s) => Value::string(s),
                serde_json::Value::Array(items) => Value::array(
                    items
                        .into_iter()
                        .map(Value::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                ),
                serde_json::Value::Object(entries) => {
                    let mut map = ObjectMap::with_capacity(entries.len());
                    for (key, value) in entries {
                        map.insert_first(key, Value::try_from(value)?);
                    }
                    Value::object(map)
                }
            })
        })
    }
}
