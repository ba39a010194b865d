//! Deferred values produced during dry-run evaluation.

use super::{ObjectMap, Value};

/// Stand-in for data that is unknown while a template is simulated.
///
/// Each variant mirrors the shape the concrete value will eventually take.
/// A placeholder is never equal to a concrete value, even one that matches
/// its payload; it is only equal to an identical placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placeholder {
    /// Unknown text such as a secure parameter or a generated name.
    ///
    /// `path` is the reference the text stands in for, and is also its
    /// text form.
    Text { path: String },
    /// Deferred integer with its best-known value.
    Integer(i64),
    /// Deferred boolean with its best-known value.
    Boolean(bool),
    /// Deferred array with the elements known so far.
    Array(Vec<Value>),
    /// Deferred object with the properties known so far.
    Object(ObjectMap),
}

impl Placeholder {
    pub fn text(path: impl Into<String>) -> Self {
        Placeholder::Text { path: path.into() }
    }

    /// Text form of a `Text` placeholder.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Placeholder::Text { path } => Some(path),
            _ => None,
        }
    }
}
