use core::error::Error;
use core::fmt;
use core::marker::PhantomData;

use crate::traits::Namespace;
use crate::types::{TagId, TaggedError};

/// A typed slot for the first link of a chain tagged within namespace `N`.
///
/// Starts empty and carries no namespace value until filled by
/// [`fill_from`](Extractor::fill_from). Any tag declared in `N` qualifies,
/// whatever its name; the filled link keeps its own tag, so further queries
/// against it reflect that tag rather than the namespace.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, wrap, Extractor};
///
/// namespace!(pub PorridgeErrs; pub BedErrs);
/// tag!(pub TooHot in PorridgeErrs; pub TooHard in BedErrs);
///
/// let err = wrap::<TooHard>(wrap::<TooHot>("not for me"));
///
/// let mut porridge = Extractor::<PorridgeErrs>::new();
/// assert!(porridge.is_empty());
/// assert!(porridge.fill_from(&err));
/// assert_eq!(porridge.tag().map(|id| id.name()), Some("TooHot"));
/// ```
pub struct Extractor<'a, N> {
    found: Option<&'a TaggedError>,
    _namespace: PhantomData<fn() -> N>,
}

impl<'a, N: Namespace> Extractor<'a, N> {
    /// Creates an empty slot.
    #[inline]
    pub const fn new() -> Self {
        Self { found: None, _namespace: PhantomData }
    }

    /// Fills the slot with the head-most link of `chain` tagged within `N`.
    ///
    /// Returns `true` if one was found. On a miss the slot is left empty.
    #[inline]
    pub fn fill_from(&mut self, chain: &'a (dyn Error + 'static)) -> bool {
        self.found = crate::chain::extract_first::<N>(chain);
        self.found.is_some()
    }

    /// Returns the extracted link, if any.
    #[inline]
    pub const fn get(&self) -> Option<&'a TaggedError> {
        self.found
    }

    /// Returns the extracted link's own tag, if any.
    #[inline]
    pub fn tag(&self) -> Option<TagId> {
        self.found.map(TaggedError::tag)
    }

    /// Returns `true` until the slot has been filled.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.found.is_none()
    }

    /// Empties the slot, returning what it held.
    #[inline]
    pub fn take(&mut self) -> Option<&'a TaggedError> {
        self.found.take()
    }
}

impl<N: Namespace> Default for Extractor<'_, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Namespace> fmt::Debug for Extractor<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("namespace", &N::NAME)
            .field("found", &self.found)
            .finish()
    }
}
