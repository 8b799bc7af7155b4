//! Match criteria for chain membership queries.

use core::error::Error;
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::traits::{Namespace, Tag};
use crate::types::{TagId, TaggedError};

/// A stateless match criterion used as the right-hand side of a chain query.
///
/// - [`Comparator::Tag`] matches links whose `(namespace, name)` equals the pair.
/// - [`Comparator::Namespace`] matches any link whose namespace equals the value.
///
/// Comparators are never part of a chain; they only describe what to look for.
/// Both `Display` and `Debug` render `<error with tag ns::name>` or
/// `<error with tag ns::*>` so failing assertions read well.
///
/// # Examples
///
/// ```
/// use error_tag::{by_namespace, by_tag, namespace, tag, wrap};
///
/// namespace!(pub BedErrs);
/// tag!(pub TooHard in BedErrs; pub TooSoft in BedErrs);
///
/// let err = wrap::<TooHard>("lumpy");
///
/// assert!(by_tag::<TooHard>().matches(&err));
/// assert!(!by_tag::<TooSoft>().matches(&err));
/// assert!(by_namespace::<BedErrs>().matches(&err));
///
/// assert_eq!(by_tag::<TooHard>().to_string(), "<error with tag BedErrs::TooHard>");
/// assert_eq!(by_namespace::<BedErrs>().to_string(), "<error with tag BedErrs::*>");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Exact `(namespace, name)` match.
    Tag(TagId),
    /// Any tag within the named namespace.
    Namespace(&'static str),
}

impl Comparator {
    /// Builds an exact-tag comparator for `E`.
    ///
    /// The identity is read off a bare exemplar built the same way
    /// [`wrap`](crate::wrap) builds its values, so the two cannot drift.
    #[inline]
    pub fn by_tag<E: Tag>() -> Self {
        Self::Tag(TaggedError::bare::<E>().tag())
    }

    /// Builds a namespace-only comparator for `N`.
    #[inline]
    pub const fn by_namespace<N: Namespace>() -> Self {
        Self::Namespace(N::NAME)
    }

    /// Returns the namespace this comparator looks for.
    #[inline]
    pub const fn namespace(&self) -> &'static str {
        match self {
            Self::Tag(id) => id.namespace(),
            Self::Namespace(namespace) => namespace,
        }
    }

    /// Tests a single link, ignoring its inner chain.
    #[inline]
    pub fn accepts(&self, link: &TaggedError) -> bool {
        match self {
            Self::Tag(id) => link.tag() == *id,
            Self::Namespace(namespace) => link.namespace() == *namespace,
        }
    }

    /// Returns `true` if any link of `chain` satisfies this comparator.
    #[inline]
    pub fn matches(&self, chain: &(dyn Error + 'static)) -> bool {
        crate::chain::matches(chain, self)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(id) => write!(f, "<error with tag {}>", id),
            Self::Namespace(namespace) => write!(f, "<error with tag {}::*>", namespace),
        }
    }
}

impl fmt::Debug for Comparator {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Builds an exact-tag comparator for `E`.
#[inline]
pub fn by_tag<E: Tag>() -> Comparator {
    Comparator::by_tag::<E>()
}

/// Builds a namespace-only comparator for `N`.
#[inline]
pub const fn by_namespace<N: Namespace>() -> Comparator {
    Comparator::by_namespace::<N>()
}
