use core::error::Error;

use crate::chain::{self, Chain};
use crate::traits::{Namespace, Tag};
use crate::types::{Comparator, TagVec, TaggedError};

/// Chain queries as methods on any error value.
///
/// Implemented for every sized `Error + 'static`. For trait objects such as
/// `Box<dyn Error>`, call the free functions in [`chain`](crate::chain) on
/// `&*boxed` instead.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, wrap, ErrorChainExt};
///
/// namespace!(pub ChairErrs);
/// tag!(pub TooBig in ChairErrs; pub TooSmall in ChairErrs);
///
/// let err = wrap::<TooBig>("cannot sit");
/// assert!(err.has_tag::<TooBig>());
/// assert!(!err.has_tag::<TooSmall>());
/// assert!(err.in_namespace::<ChairErrs>());
/// ```
pub trait ErrorChainExt {
    /// Returns `self` as the head of a chain.
    fn chain_head(&self) -> &(dyn Error + 'static);

    /// Returns `true` if any link satisfies `comparator`.
    #[inline]
    fn is_tagged_with(&self, comparator: &Comparator) -> bool {
        chain::matches(self.chain_head(), comparator)
    }

    /// Returns `true` if any link carries exactly tag `E`.
    #[inline]
    fn has_tag<E: Tag>(&self) -> bool {
        self.is_tagged_with(&Comparator::by_tag::<E>())
    }

    /// Returns `true` if any link carries a tag within namespace `N`.
    #[inline]
    fn in_namespace<N: Namespace>(&self) -> bool {
        self.is_tagged_with(&Comparator::by_namespace::<N>())
    }

    /// Returns the head-most link tagged within namespace `N`.
    #[inline]
    fn find_in<N: Namespace>(&self) -> Option<&TaggedError> {
        chain::extract_first::<N>(self.chain_head())
    }

    /// Collects every tag on the chain, head first.
    #[inline]
    fn tags(&self) -> TagVec {
        chain::tags(self.chain_head())
    }

    /// Walks every link of the chain, head first.
    #[inline]
    fn links(&self) -> Chain<'_> {
        chain::iter(self.chain_head())
    }
}

impl<E: Error + 'static> ErrorChainExt for E {
    #[inline]
    fn chain_head(&self) -> &(dyn Error + 'static) {
        self
    }
}
