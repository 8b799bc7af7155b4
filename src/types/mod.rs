//! Tag identities and the values built from them.
//!
//! - [`TagId`]: the resolved `(namespace, name)` pair of a declared tag
//! - [`TaggedError`]: an error carrying one tag plus an optional inner cause
//! - [`Comparator`]: exact-tag or namespace-only match criteria
//! - [`Extractor`]: a typed slot filled with the first link tagged within a namespace
//! - [`Message`]: a plain message error that may keep a cause in the chain
//!
//! # Examples
//!
//! ```
//! use error_tag::{namespace, tag, types::TagId, wrap};
//!
//! namespace!(pub BedErrs);
//! tag!(pub TooSoft in BedErrs);
//!
//! let err = wrap::<TooSoft>("floof");
//! assert_eq!(err.tag(), TagId::of::<TooSoft>());
//! assert_eq!(err.to_string(), "BedErrs::TooSoft: floof");
//! ```
use smallvec::SmallVec;

#[doc(hidden)]
pub mod alloc_type;
pub mod comparator;
pub mod extractor;
pub mod message;
pub mod tag_id;
pub mod tagged_error;

pub use comparator::*;
pub use extractor::*;
pub use message::*;
pub use tag_id::*;
pub use tagged_error::*;

/// SmallVec-backed collection of the tags found along one chain.
///
/// Uses inline storage for up to 4 tags, which covers typical layering
/// without touching the heap.
pub type TagVec = SmallVec<[TagId; 4]>;

/// Owned, thread-safe error used as the inner cause of a tagged error.
pub type BoxError = alloc_type::Box<dyn core::error::Error + Send + Sync + 'static>;
