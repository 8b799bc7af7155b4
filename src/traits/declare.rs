//! Namespace and tag declarations.
//!
//! Both traits carry their identity as associated constants, so a tag's
//! `(namespace, name)` pair is fixed when the type is declared. A type that
//! is not a [`Tag`] cannot be passed to [`wrap`](crate::wrap) at all, and a
//! tag names exactly one namespace through its associated type.
//!
//! The [`namespace!`](crate::namespace) and [`tag!`](crate::tag) macros are
//! the usual way to implement these; they take `NAME` from the declared
//! type's own identifier.
//!
//! # Examples
//!
//! ```
//! use error_tag::traits::{Namespace, Tag};
//!
//! struct FsErr;
//!
//! impl Namespace for FsErr {
//!     const NAME: &'static str = "FsErr";
//! }
//!
//! struct NotFound;
//!
//! impl Tag for NotFound {
//!     type Namespace = FsErr;
//!     const NAME: &'static str = "NotFound";
//! }
//!
//! assert_eq!(<NotFound as Tag>::Namespace::NAME, "FsErr");
//! ```

/// A named grouping of related tags.
///
/// Namespaces are zero-state markers. Declare one `pub` when other crates
/// may add tags to it, private otherwise.
pub trait Namespace: 'static {
    /// The bare declared name of the namespace type.
    const NAME: &'static str;
}

/// A named error classification within exactly one [`Namespace`].
pub trait Tag: 'static {
    /// The namespace this tag belongs to.
    type Namespace: Namespace;

    /// The bare declared name of the tag type.
    const NAME: &'static str;
}
