//! Runtime values for template expressions.
//!
//! # Heap Enforcement
//!
//! Strings, arrays, objects and placeholders live behind `Heap<T>`, whose
//! constructor is private to this module. External code builds them through
//! the factory methods:
//!
//! ```text
//! let s = Value::string("westus");              // OK
//! let list = Value::array(vec![]);              // OK
//! let obj = Value::object_from_pairs([("a", 1)]); // OK
//! let s = Value::String(Heap::new(...));        // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Equality
//!
//! `PartialEq` on `Value` is exact representational identity: same variant,
//! same payload, same object key order. The template-level comparison that
//! reconciles placeholders and ignores object key order lives in the runtime
//! crate's equality engine.

mod heap;
mod object;
mod placeholder;
mod serialize;

use std::fmt;

use chrono::{DateTime, Utc};

pub use heap::Heap;
pub use object::ObjectMap;
pub use placeholder::Placeholder;

/// A template datum.
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    /// Absent or JSON `null`.
    Null,
    Boolean(bool),
    /// All numbers are 64-bit integers.
    Integer(i64),
    String(Heap<String>),
    /// An instant, always normalized to UTC.
    DateTime(DateTime<Utc>),
    Array(Heap<Vec<Value>>),
    Object(Heap<ObjectMap>),
    Placeholder(Heap<Placeholder>),
}

// Factory methods (the only way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Heap::new(s.into()))
    }

    /// Create an array value.
    ///
    /// ```text
    /// let empty = Value::array(vec![]);
    /// let zones = Value::array(vec![Value::from("1"), Value::from("2")]);
    /// ```
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// Create an object value from an already built map.
    #[inline]
    pub fn object(map: ObjectMap) -> Self {
        Value::Object(Heap::new(map))
    }

    /// Create an object from an association-like sequence of pairs.
    ///
    /// Duplicate keys keep their first value.
    pub fn object_from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::object(pairs.into_iter().collect())
    }

    #[inline]
    pub fn placeholder(placeholder: Placeholder) -> Self {
        Value::Placeholder(Heap::new(placeholder))
    }

    /// Create a text placeholder standing in for `path`.
    #[inline]
    pub fn text_placeholder(path: impl Into<String>) -> Self {
        Value::placeholder(Placeholder::text(path))
    }
}

// Accessors (exact variant only, no placeholder unwrapping)

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            Value::Placeholder(p) => Some(p),
            _ => None,
        }
    }

    /// Type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "bool",
            Value::Integer(_) => "int",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Placeholder(_) => "placeholder",
        }
    }
}

/// Template literal text for a boolean.
///
/// Interpolated booleans render capitalized; downstream consumers compare
/// against these exact strings.
pub fn bool_literal(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::String(s) => write!(f, "String({:?})", &**s),
            Value::DateTime(dt) => write!(f, "DateTime({})", crate::token::format_date_time(dt)),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Object(map) => write!(f, "Object({:?})", &**map),
            Value::Placeholder(p) => write!(f, "Placeholder({:?})", &**p),
        }
    }
}

/// Literal text form used when a template interpolates a value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Boolean(b) => f.write_str(bool_literal(*b)),
            Value::Integer(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::DateTime(dt) => f.write_str(&crate::token::format_date_time(dt)),
            Value::Array(_) | Value::Object(_) => write!(f, "{}", crate::token::to_token(self)),
            Value::Placeholder(p) => match &**p {
                Placeholder::Text { path } => f.write_str(path),
                Placeholder::Integer(n) => write!(f, "{n}"),
                Placeholder::Boolean(b) => f.write_str(bool_literal(*b)),
                Placeholder::Array(_) | Placeholder::Object(_) => {
                    write!(f, "{}", crate::token::to_token(self))
                }
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<ObjectMap> for Value {
    fn from(map: ObjectMap) -> Self {
        Value::object(map)
    }
}

impl From<Placeholder> for Value {
    fn from(p: Placeholder) -> Self {
        Value::placeholder(p)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::object_from_pairs(iter)
    }
}

#[cfg(test)]
mod tests;
