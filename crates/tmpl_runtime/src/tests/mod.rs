//! Cross-module tests for the runtime.
