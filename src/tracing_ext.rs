//! Tracing integration for error-tag.
//!
//! The core never logs. These helpers let callers report a failure as a
//! structured `tracing` event carrying the head-most tag, the number of
//! tags on the chain and the rendered error.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-tag = { version = "0.1", features = ["tracing"] }
//! ```

use core::error::Error;

use crate::chain;

/// Emits one `WARN` event describing `err` and its tags.
///
/// Tagged chains are reported with a `tag` field naming the head-most tag
/// and a `tags` field counting every tag on the chain; untagged errors are
/// reported without them.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, tracing_ext::record, wrap};
///
/// namespace!(pub FsErr);
/// tag!(pub NotFound in FsErr);
///
/// record(&wrap::<NotFound>("missing"));
/// ```
pub fn record(err: &(dyn Error + 'static)) {
    let tags = chain::tags(err);
    match tags.first() {
        Some(head) => tracing::warn!(tag = %head, tags = tags.len(), error = %err, "tagged error"),
        None => tracing::warn!(error = %err, "untagged error"),
    }
}

/// Extension trait that reports failed results through [`record`].
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, tracing_ext::TraceTagExt, ResultTagExt};
///
/// namespace!(pub ApiErr);
/// tag!(pub Internal in ApiErr);
///
/// let result: Result<u8, &str> = Err("boom");
/// let traced = result.tag::<Internal>().trace_tags();
/// assert!(traced.is_err());
/// ```
pub trait TraceTagExt {
    /// Records the error, if any, and returns `self` unchanged.
    #[must_use]
    fn trace_tags(self) -> Self;
}

impl<T, X> TraceTagExt for Result<T, X>
where
    X: Error + 'static,
{
    #[inline]
    fn trace_tags(self) -> Self {
        if let Err(err) = &self {
            record(err);
        }
        self
    }
}
