//! Integration tests for async extensions.

#[cfg(feature = "async")]
mod future_ext_tests;
