//! Errors raised while ingesting foreign data into the value model.

use thiserror::Error;

/// Failure to build a [`Value`](crate::Value) from a token or JSON text.
///
/// Only construction can fail. Probes and comparisons over an existing
/// `Value` are total.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A number that is fractional or outside the `i64` range.
    #[error("number `{0}` is not a 64-bit integer")]
    NonIntegerNumber(String),
    /// JSON text that failed to parse.
    #[error("invalid JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ValueError {
    fn from(err: serde_json::Error) -> Self {
        ValueError::Json(err.to_string())
    }
}
