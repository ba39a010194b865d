//! Index search over array-like values.
//!
//! All four searches scan front to back. With `first` set they stop at the
//! first match; otherwise they run to the end and report the *last* match.
//! A target that is not array-like never matches.

use tmpl_value::Value;

use crate::equality::{equal, sequence_equal};
use crate::probe::{try_as_array, try_as_integer, try_as_string_array};

/// Index of `needle` among the string elements of `target`.
///
/// Comparison is ordinal; with `case_sensitive` unset it ignores case.
/// Non-string elements never match.
pub fn try_find_string_index(
    target: &Value,
    needle: &str,
    case_sensitive: bool,
    first: bool,
) -> Option<usize> {
    let items = try_as_string_array(target)?;
    scan(items, first, |item| {
        item.is_some_and(|s| {
            if case_sensitive {
                s == needle
            } else {
                ordinal_ignore_case_eq(s, needle)
            }
        })
    })
}

/// Index of `needle` among the integer elements of `target`.
pub fn try_find_integer_index(target: &Value, needle: i64, first: bool) -> Option<usize> {
    let items = try_as_array(target)?;
    scan(items, first, |item| try_as_integer(item) == Some(needle))
}

/// Index of the element of `target` that is an array sequence-equal to `needle`.
pub fn try_find_array_index(target: &Value, needle: &[Value], first: bool) -> Option<usize> {
    let items = try_as_array(target)?;
    scan(items, first, |item| {
        try_as_array(item).is_some_and(|candidate| sequence_equal(candidate, needle))
    })
}

/// Index of the element of `target` that is `equal` to `needle`.
pub fn try_find_object_index(target: &Value, needle: &Value, first: bool) -> Option<usize> {
    let items = try_as_array(target)?;
    scan(items, first, |item| equal(item, needle))
}

fn scan<T>(
    items: impl IntoIterator<Item = T>,
    first: bool,
    mut is_match: impl FnMut(T) -> bool,
) -> Option<usize> {
    let mut found = None;
    for (index, item) in items.into_iter().enumerate() {
        if is_match(item) {
            found = Some(index);
            if first {
                break;
            }
        }
    }
    found
}

/// Case-insensitive ordinal comparison: each char is compared after simple
/// uppercase mapping, with no culture-specific folding.
fn ordinal_ignore_case_eq(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| x == y || simple_upper(x) == simple_upper(y))
}

/// Single-char uppercase; chars that expand (e.g. `ß`) map to themselves.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
