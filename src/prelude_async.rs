//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus async-specific items.
//!
//! # Usage
//!
//! ```ignore
//! use error_tag::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> TaggedResult<User> {
//!     fetch_from_db(id).tag::<Internal>().await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`namespace!`], [`tag!`], [`tagged!`]
//! - **Types**: [`TaggedError`], [`TagId`], [`Comparator`], [`Extractor`]
//! - **Traits**: [`ErrorChainExt`], [`ResultTagExt`], [`Namespace`], [`Tag`]
//! - **Type Alias**: [`TaggedResult`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureTagExt`](crate::async_ext::FutureTagExt) - `.tag::<E>()` for futures
//! - **Types**: [`TagFuture`](crate::async_ext::TagFuture)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{FutureTagExt, TagFuture};
