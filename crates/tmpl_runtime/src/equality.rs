//! Polymorphic equality across every value representation.
//!
//! `equal` is the comparison behind `equals`, `contains`, index-of and
//! union deduplication. It is evaluated in this order:
//!
//! 1. null is equal only to null;
//! 2. a placeholder is equal only to an identical placeholder;
//! 3. array-like values compare element-wise, and never equal a non-array;
//! 4. strings compare ordinally, and never equal a non-string;
//! 5. integers compare numerically, and never equal a non-integer;
//! 6. remaining kinds compare structurally: booleans and instants by value,
//!    objects by key set with recursively equal values.
//!
//! Object comparison ignores key order; array comparison does not.

use tmpl_value::{ensure_sufficient_stack, ObjectMap, Placeholder, Value};

/// Template-level equality of two values. Total; never panics.
pub fn equal(a: &Value, b: &Value) -> bool {
    ensure_sufficient_stack(|| match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,

        (Value::Placeholder(x), Value::Placeholder(y)) => placeholder_equal(x, y),
        (Value::Placeholder(_), _) | (_, Value::Placeholder(_)) => false,

        (Value::Array(x), Value::Array(y)) => sequence_equal(x, y),
        (Value::Array(_), _) | (_, Value::Array(_)) => false,

        (Value::String(x), Value::String(y)) => x == y,
        (Value::String(_), _) | (_, Value::String(_)) => false,

        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::Integer(_), _) | (_, Value::Integer(_)) => false,

        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::DateTime(x), Value::DateTime(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => object_equal(x, y),
        _ => false,
    })
}

/// Equal lengths and `equal` pairwise in order.
pub fn sequence_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equal(x, y))
}

fn object_equal(a: &ObjectMap, b: &ObjectMap) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, x)| b.get(key).is_some_and(|y| equal(x, y)))
}

/// Same sub-kind and equal payload.
fn placeholder_equal(a: &Placeholder, b: &Placeholder) -> bool {
    match (a, b) {
        (Placeholder::Text { path: x }, Placeholder::Text { path: y }) => x == y,
        (Placeholder::Integer(x), Placeholder::Integer(y)) => x == y,
        (Placeholder::Boolean(x), Placeholder::Boolean(y)) => x == y,
        (Placeholder::Array(x), Placeholder::Array(y)) => sequence_equal(x, y),
        (Placeholder::Object(x), Placeholder::Object(y)) => object_equal(x, y),
        _ => false,
    }
}
