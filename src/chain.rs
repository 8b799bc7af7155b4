//! Head-to-tail traversal of error chains.
//!
//! A chain is the sequence of errors reachable from a head through
//! [`Error::source`]. Every link is probed for a [`TaggedError`]; links of
//! any other type are walked through via their own `source`, so foreign
//! wrappers in the middle of a chain do not hide the tags beneath them.
//!
//! `Box<TaggedError>` and `Arc<TaggedError>` forward `source` to their
//! contents' source, skipping the contents, and so does `std::io::Error`
//! for its payload. [`as_tagged`] resolves such links to the tagged value
//! they hold.
//!
//! Queries never fail. A miss is `false` or `None`, and every walk ends
//! when a link reports no source.
//!
//! # Examples
//!
//! ```
//! use error_tag::{by_namespace, chain, namespace, tag, wrap};
//!
//! namespace!(pub PorridgeErrs; pub ChairErrs);
//! tag!(pub TooHot in PorridgeErrs; pub TooBig in ChairErrs);
//!
//! let err = wrap::<TooBig>(wrap::<TooHot>("not for me"));
//!
//! assert_eq!(chain::iter(&err).count(), 3);
//! assert!(chain::matches(&err, &by_namespace::<PorridgeErrs>()));
//!
//! let tags = chain::tags(&err);
//! assert_eq!(tags[0].to_string(), "ChairErrs::TooBig");
//! assert_eq!(tags[1].to_string(), "PorridgeErrs::TooHot");
//! ```

use core::error::Error;
use core::iter::FusedIterator;

use crate::traits::Namespace;
use crate::types::alloc_type::{Arc, Box};
use crate::types::{Comparator, TagVec, TaggedError};

/// Iterator over the links of a chain, head first.
///
/// Created by [`iter`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Starts a walk at `head`.
    #[inline]
    pub fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(head) }
    }

    /// Narrows the walk to tagged links only.
    #[inline]
    pub fn tagged(self) -> impl Iterator<Item = &'a TaggedError> {
        self.filter_map(as_tagged)
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

impl core::fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Resolves one link to the tagged error it is or holds.
///
/// Accepts a `TaggedError` itself, one behind `Box` or `Arc`, and (with
/// `std`) one carried as the payload of a `std::io::Error`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use error_tag::{chain, namespace, tag, wrap};
///
/// namespace!(pub FsErr);
/// tag!(pub NotFound in FsErr);
///
/// let shared = Arc::new(wrap::<NotFound>("missing"));
/// assert!(chain::as_tagged(&shared).is_some_and(|link| link.is::<NotFound>()));
/// ```
pub fn as_tagged<'a>(link: &'a (dyn Error + 'static)) -> Option<&'a TaggedError> {
    if let Some(tagged) = link.downcast_ref::<TaggedError>() {
        return Some(tagged);
    }
    if let Some(boxed) = link.downcast_ref::<Box<TaggedError>>() {
        return Some(boxed);
    }
    if let Some(shared) = link.downcast_ref::<Arc<TaggedError>>() {
        return Some(shared);
    }
    io_payload(link)
}

#[cfg(feature = "std")]
fn io_payload<'a>(link: &'a (dyn Error + 'static)) -> Option<&'a TaggedError> {
    link.downcast_ref::<std::io::Error>()?.get_ref().and_then(|payload| as_tagged(payload))
}

#[cfg(not(feature = "std"))]
#[inline]
fn io_payload<'a>(_link: &'a (dyn Error + 'static)) -> Option<&'a TaggedError> {
    None
}

/// Walks every link of the chain starting at `head`.
#[inline]
pub fn iter<'a>(head: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain::new(head)
}

/// Returns `true` if any link of the chain satisfies `comparator`.
///
/// The head-most match wins and ends the walk.
#[inline]
pub fn matches(head: &(dyn Error + 'static), comparator: &Comparator) -> bool {
    iter(head).tagged().any(|link| comparator.accepts(link))
}

/// Returns the head-most link tagged within namespace `N`, whatever its name.
///
/// # Examples
///
/// ```
/// use error_tag::{chain, namespace, tag, wrap};
///
/// namespace!(pub ApiErr; pub FsErr);
/// tag!(pub Internal in ApiErr; pub Unsupported in FsErr);
///
/// let err = wrap::<Internal>(wrap::<Unsupported>("only /tmp can be read"));
///
/// let fs = chain::extract_first::<FsErr>(&err).unwrap();
/// assert!(fs.is::<Unsupported>());
/// assert_eq!(fs.to_string(), "FsErr::Unsupported: only /tmp can be read");
/// ```
#[inline]
pub fn extract_first<'a, N: Namespace>(head: &'a (dyn Error + 'static)) -> Option<&'a TaggedError> {
    iter(head).tagged().find(|link| link.belongs_to::<N>())
}

/// Collects every tag on the chain, head first.
#[inline]
pub fn tags(head: &(dyn Error + 'static)) -> TagVec {
    iter(head).tagged().map(TaggedError::tag).collect()
}
