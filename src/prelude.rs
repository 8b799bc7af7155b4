//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_tag::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`namespace!`], [`tag!`], [`tagged!`]
//! - **Functions**: [`wrap`], [`formatted`], [`by_tag`], [`by_namespace`]
//! - **Types**: [`TaggedError`], [`TagId`], [`Comparator`], [`Extractor`]
//! - **Traits**: [`Namespace`], [`Tag`], [`ErrorChainExt`], [`ResultTagExt`]
//!
//! # Examples
//!
//! ```
//! use error_tag::prelude::*;
//!
//! namespace!(pub ConfigErr);
//! tag!(pub Unreadable in ConfigErr);
//!
//! fn load_config() -> TaggedResult<String> {
//!     std::fs::read_to_string("/definitely/not/here/config.toml").tag::<Unreadable>()
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.is_tagged_with(&by_namespace::<ConfigErr>()));
//! ```

// Macros
pub use crate::{namespace, tag, tagged};

// Constructors
pub use crate::types::{by_namespace, by_tag, formatted, wrap};

// Core types
pub use crate::types::{Comparator, Extractor, TagId, TaggedError};

// Traits
pub use crate::traits::{ErrorChainExt, Namespace, ResultTagExt, Tag};

/// Convenient result type alias for functions failing with a tagged error.
///
/// # Examples
///
/// ```
/// use error_tag::prelude::*;
///
/// namespace!(pub FsErr);
/// tag!(pub Unsupported in FsErr);
///
/// fn read_file(path: &str) -> TaggedResult<String> {
///     if !path.starts_with("/tmp/") {
///         return Err(tagged!(Unsupported, "only /tmp can be read"));
///     }
///     Ok(path.trim_start_matches("/tmp/").to_owned())
/// }
///
/// assert!(read_file("/var/log/foo.log").is_err());
/// ```
pub type TaggedResult<T> = Result<T, TaggedError>;
