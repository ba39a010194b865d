//! Tmpl Runtime - coercion, equality and hashing for template functions.
//!
//! Every built-in template function coerces its arguments through this
//! crate before doing any work of its own.
//!
//! # Architecture
//!
//! - `probe`: strict (`try_as_*`) and loose (`try_convert_*`) narrowing
//! - `equality`: polymorphic `equal` and `sequence_equal`
//! - `search`: front-to-back index scans over array-like values
//! - `merge`: first-wins `union_array` / `union_object`
//! - `unique`: namespace-seeded SHA-256 digest and short identifiers
//! - `datetime`: deployment timestamp parsing
//!
//! All operations are pure. Soft failures are `None`; the only hard failure
//! is `UniqueError` from the unique hash.
//!
//! # Re-exports
//!
//! The value model from `tmpl_value` is re-exported so callers depend on a
//! single crate: `Value`, `ObjectMap`, `Placeholder`, `to_token`,
//! `is_array`, `is_object`, `ValueError`.

mod datetime;
mod equality;
mod errors;
mod merge;
mod probe;
mod search;
mod trace;
mod unique;

#[cfg(test)]
mod tests;

pub use tmpl_value::{
    bool_literal, is_array, is_object, to_token, Heap, ObjectMap, Placeholder, Value, ValueError,
};

pub use datetime::parse_date_time;
pub use equality::{equal, sequence_equal};
pub use errors::UniqueError;
pub use merge::{union_array, union_object};
pub use probe::{
    try_as_array, try_as_bool, try_as_date_time, try_as_int32, try_as_integer, try_as_object,
    try_as_string, try_as_string_array, try_bool_string, try_convert_array, try_convert_bool,
    try_convert_date_time, try_convert_int32, try_convert_integer, try_convert_object,
    try_convert_string, try_convert_string_array,
};
pub use search::{
    try_find_array_index, try_find_integer_index, try_find_object_index, try_find_string_index,
};
pub use trace::init_tracing;
pub use unique::{compute_digest, unique_string, UniqueHasher, UNIQUE_STRING_LEN, URL_NAMESPACE};
