//! Typed `namespace::name` tags for error chains.
//!
//! A namespace groups a family of tags; a tag is a marker type that belongs to
//! exactly one namespace. Wrapping an error in a tag produces a
//! [`TaggedError`], and wrapping repeatedly builds a linear chain that can be
//! queried later by exact tag, by namespace, or by extracting the first link
//! tagged within a namespace. No string parsing or sentinel values involved.
//!
//! # Examples
//!
//! ## Declaring and Wrapping
//!
//! ```
//! use error_tag::{namespace, tag, wrap};
//!
//! namespace!(pub PorridgeErrs);
//! tag!(pub TooHot in PorridgeErrs);
//!
//! let err = wrap::<TooHot>("ouch my tongue");
//! assert_eq!(err.to_string(), "PorridgeErrs::TooHot: ouch my tongue");
//! ```
//!
//! ## Querying a Chain
//!
//! ```
//! use error_tag::{by_namespace, by_tag, namespace, tag, wrap, ErrorChainExt};
//!
//! namespace!(pub PorridgeErrs; pub ChairErrs);
//! tag!(pub TooHot in PorridgeErrs; pub TooBig in ChairErrs; pub TooSmall in ChairErrs);
//!
//! let err = wrap::<TooBig>(wrap::<TooHot>("not for me"));
//!
//! assert!(err.is_tagged_with(&by_tag::<TooHot>()));
//! assert!(err.is_tagged_with(&by_namespace::<ChairErrs>()));
//! assert!(!err.has_tag::<TooSmall>());
//!
//! let porridge = err.find_in::<PorridgeErrs>().unwrap();
//! assert_eq!(porridge.tag().to_string(), "PorridgeErrs::TooHot");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Head-to-tail traversal and matching over error chains
pub mod chain;
/// Declaration macros for namespaces, tags and formatted tagged errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Declaration and extension traits
pub mod traits;
/// Tag identities, tagged errors, comparators and extractors
pub mod types;

/// Async extensions for tagging future errors (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

/// Tracing integration for tagged failures (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::{extract_first, matches, Chain};
pub use traits::*;
pub use types::{
    by_namespace, by_tag, formatted, wrap, BoxError, Comparator, Extractor, Message, TagId,
    TagVec, TaggedError,
};
