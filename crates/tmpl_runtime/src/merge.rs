//! First-wins union of array-like and object-like values.

use tmpl_value::{ObjectMap, Value};

use crate::equality::equal;
use crate::probe::{try_as_array, try_as_object};

/// Concatenate every array-like argument, dropping later duplicates.
///
/// Non-array arguments are skipped. Duplicates are detected with `equal`,
/// so the membership test is quadratic in the total element count.
pub fn union_array(values: &[Value]) -> Value {
    let mut result: Vec<Value> = Vec::new();
    for items in values.iter().filter_map(try_as_array) {
        for item in items {
            if !result.iter().any(|seen| equal(seen, item)) {
                result.push(item.clone());
            }
        }
    }
    tracing::trace!(arguments = values.len(), elements = result.len(), "union of arrays");
    Value::array(result)
}

/// Merge every object-like argument, keeping the first value of each key.
///
/// Non-object arguments are skipped. Keys keep the order in which they
/// first appeared.
pub fn union_object(values: &[Value]) -> Value {
    let mut result = ObjectMap::new();
    for map in values.iter().filter_map(try_as_object) {
        for (key, value) in map {
            if !result.contains_key(key) {
                result.insert_first(key.clone(), value.clone());
            }
        }
    }
    tracing::trace!(arguments = values.len(), keys = result.len(), "union of objects");
    Value::object(result)
}

#[cfg(test)]
mod tests;
