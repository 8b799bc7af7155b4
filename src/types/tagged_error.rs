//! The tagged error value and the constructors that produce it.

use core::any::TypeId;
use core::error::Error;
use core::fmt;

use crate::traits::{Namespace, Tag};
use crate::types::alloc_type::format;
use crate::types::{BoxError, Message, TagId};

/// An error carrying one resolved tag plus an optional inner cause.
///
/// Built by [`wrap`], [`formatted`] or [`TaggedError::bare`]. The inner cause
/// is owned exclusively and exposed through [`Error::source`], so repeated
/// wrapping forms a linear chain that [`chain`](crate::chain) walks
/// head-to-tail.
///
/// Rendering is `"<namespace>::<name>: <inner>"`, or just
/// `"<namespace>::<name>"` when there is no inner cause.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, wrap, TaggedError};
///
/// namespace!(pub ApiErr);
/// tag!(pub Internal in ApiErr);
///
/// let err = wrap::<Internal>("disk on fire");
/// assert_eq!(err.to_string(), "ApiErr::Internal: disk on fire");
///
/// let bare = TaggedError::bare::<Internal>();
/// assert_eq!(bare.to_string(), "ApiErr::Internal");
/// ```
#[must_use]
pub struct TaggedError {
    id: TagId,
    namespace_type: TypeId,
    inner: Option<BoxError>,
}

impl TaggedError {
    /// Creates a tagged error for `E` around an optional inner cause.
    #[inline]
    pub fn new<E: Tag>(inner: Option<BoxError>) -> Self {
        Self { id: TagId::of::<E>(), namespace_type: TypeId::of::<E::Namespace>(), inner }
    }

    /// Creates a tagged error for `E` with no inner cause.
    #[inline]
    pub fn bare<E: Tag>() -> Self {
        Self::new::<E>(None)
    }

    /// Returns the resolved `(namespace, name)` identity.
    #[inline]
    pub const fn tag(&self) -> TagId {
        self.id
    }

    /// Returns the namespace name.
    #[inline]
    pub const fn namespace(&self) -> &'static str {
        self.id.namespace()
    }

    /// Returns the tag name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Returns a reference to the inner cause, if any.
    #[inline]
    pub fn inner(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.inner.as_deref()
    }

    /// Consumes the tagged error, returning the inner cause.
    #[inline]
    pub fn into_inner(self) -> Option<BoxError> {
        self.inner
    }

    /// Returns `true` if this link itself carries tag `E`.
    ///
    /// Unlike [`ErrorChainExt::has_tag`](crate::ErrorChainExt::has_tag), this
    /// does not look at the inner chain.
    #[inline]
    pub fn is<E: Tag>(&self) -> bool {
        self.id == TagId::of::<E>()
    }

    /// Returns `true` if this link was declared inside namespace `N`.
    ///
    /// Compares namespace types, not names.
    #[inline]
    pub fn belongs_to<N: Namespace>(&self) -> bool {
        self.namespace_type == TypeId::of::<N>()
    }
}

impl fmt::Debug for TaggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedError")
            .field("tag", &format_args!("{}", self.id))
            .field("inner", &self.inner)
            .finish()
    }
}

impl fmt::Display for TaggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => write!(f, "{}: {}", self.id, inner),
            None => fmt::Display::fmt(&self.id, f),
        }
    }
}

impl Error for TaggedError {
    /// Returns the inner cause, continuing the chain.
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_deref().map(|inner| inner as &(dyn Error + 'static))
    }
}

/// Wraps `inner` in tag `E`.
///
/// Anything convertible into a [`BoxError`] is accepted: other errors
/// (tagged or not), `&str` and `String` messages. The original cause is
/// always kept as the inner link.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, wrap};
///
/// namespace!(pub PorridgeErrs; pub BedErrs);
/// tag!(pub TooHot in PorridgeErrs; pub TooHard in BedErrs);
///
/// let err = wrap::<TooHard>(wrap::<TooHot>("not for me"));
/// assert_eq!(err.to_string(), "BedErrs::TooHard: PorridgeErrs::TooHot: not for me");
/// ```
#[inline]
pub fn wrap<E: Tag>(inner: impl Into<BoxError>) -> TaggedError {
    TaggedError::new::<E>(Some(inner.into()))
}

/// Wraps a formatted message in tag `E`.
///
/// Usually reached through the [`tagged!`](crate::tagged) macro.
///
/// # Examples
///
/// ```
/// use error_tag::{formatted, namespace, tag};
///
/// namespace!(pub FsErr);
/// tag!(pub NotFound in FsErr);
///
/// let err = formatted::<NotFound>(format_args!("file not found: {:?}", "/tmp/missing"));
/// assert_eq!(err.to_string(), "FsErr::NotFound: file not found: \"/tmp/missing\"");
/// ```
#[inline]
pub fn formatted<E: Tag>(args: fmt::Arguments<'_>) -> TaggedError {
    wrap::<E>(Message::new(format(args)))
}
