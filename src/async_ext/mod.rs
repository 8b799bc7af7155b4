//! Async extensions for error-tag.
//!
//! Tagging a future wraps its error only when it resolves to `Err`; the
//! success path is left alone.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-tag = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_tag::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> TaggedResult<User> {
//!     fetch_from_db(id).tag::<Internal>().await
//! }
//! ```

mod future_ext;
mod tag_future;

pub use future_ext::FutureTagExt;
pub use tag_future::TagFuture;
