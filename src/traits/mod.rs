//! Declaration and extension traits.
//!
//! - [`Namespace`]: a named grouping of tags
//! - [`Tag`]: a named classification inside exactly one namespace
//! - [`ErrorChainExt`]: chain queries as methods on any error
//! - [`ResultTagExt`]: `.tag::<E>()` on the error side of a `Result`
//!
//! # Examples
//!
//! ```
//! use error_tag::traits::{ErrorChainExt, ResultTagExt};
//! use error_tag::{namespace, tag};
//!
//! namespace!(pub FsErr);
//! tag!(pub NotFound in FsErr);
//!
//! let result: Result<(), &str> = Err("missing");
//! let err = result.tag::<NotFound>().unwrap_err();
//! assert!(err.in_namespace::<FsErr>());
//! ```

pub mod chain_ext;
pub mod declare;
pub mod result_ext;

pub use chain_ext::ErrorChainExt;
pub use declare::{Namespace, Tag};
pub use result_ext::ResultTagExt;
