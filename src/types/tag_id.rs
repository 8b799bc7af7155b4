use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::traits::{Namespace, Tag};

/// The resolved identity of a tag: its namespace name and its own name.
///
/// Renders as `"<namespace>::<name>"`.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, TagId};
///
/// namespace!(pub ChairErrs);
/// tag!(pub TooBig in ChairErrs);
///
/// let id = TagId::of::<TooBig>();
/// assert_eq!(id.namespace(), "ChairErrs");
/// assert_eq!(id.name(), "TooBig");
/// assert_eq!(id.to_string(), "ChairErrs::TooBig");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId {
    namespace: &'static str,
    name: &'static str,
}

impl TagId {
    /// Creates an identity from raw parts.
    #[inline]
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self { namespace, name }
    }

    /// Resolves the identity of a declared tag from its type alone.
    #[inline]
    pub const fn of<E: Tag>() -> Self {
        Self { namespace: <E::Namespace as Namespace>::NAME, name: E::NAME }
    }

    /// Returns the namespace name.
    #[inline]
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Returns the tag name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this identity lives in namespace `N`.
    #[inline]
    pub fn is_in<N: Namespace>(&self) -> bool {
        self.namespace == N::NAME
    }
}

impl fmt::Display for TagId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.namespace, self.name)
    }
}
