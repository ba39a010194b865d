//! Hard failures raised by the runtime.
//!
//! Everything else in this crate fails softly with `None`.

use thiserror::Error;

/// An argument to the unique hash that has no text form.
///
/// Callers surface this as an invalid argument to the template function
/// that requested the identifier.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UniqueError {
    #[error("argument {index} must be a string to compute a unique hash, found {type_name}")]
    NotText {
        index: usize,
        type_name: &'static str,
    },
}
