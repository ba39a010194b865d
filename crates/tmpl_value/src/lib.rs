//! Tmpl Value - closed value model for template expressions.
//!
//! Every datum the template runtime manipulates is a [`Value`]. The model is
//! closed: native scalars, canonical JSON tokens, association-like inputs and
//! deferred placeholders are all normalized into the same tagged union before
//! any coercion or comparison happens.
//!
//! # Contents
//!
//! - `Value`, `ObjectMap`, `Placeholder`, `Heap`: the data model
//! - `to_token`, `is_array`, `is_object`: the canonical token bridge
//! - `ValueError`: failures while ingesting foreign data
//! - `ensure_sufficient_stack`: stack guard for recursive walks
//!
//! # Immutability
//!
//! Heap-backed variants share storage through `Heap<T>`, which has no public
//! constructor and no mutable access. Once a `Value` exists it never changes;
//! transformations build new values.

mod errors;
mod stack;
mod token;
mod value;

pub use errors::ValueError;
pub use stack::ensure_sufficient_stack;
pub use token::{is_array, is_object, to_token};
pub use value::{bool_literal, Heap, ObjectMap, Placeholder, Value};
