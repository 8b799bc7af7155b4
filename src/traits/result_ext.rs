//! Extension trait for tagging the error side of `Result` types.
//!
//! This module provides [`ResultTagExt`], which wraps a failure in a tag
//! without verbose `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use error_tag::{namespace, tag, traits::ResultTagExt, TaggedError};
//!
//! namespace!(pub ConfigErr);
//! tag!(pub Unreadable in ConfigErr);
//!
//! fn load_config() -> Result<String, TaggedError> {
//!     std::fs::read_to_string("/definitely/not/here/config.toml").tag::<Unreadable>()
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.is::<Unreadable>());
//! ```

use crate::traits::Tag;
use crate::types::alloc_type::Cow;
use crate::types::{wrap, BoxError, Message, TaggedError};

/// Extension trait for wrapping `Result` errors in a tag.
///
/// The success path is untouched; messages passed to
/// [`tag_with`](ResultTagExt::tag_with) are only built on failure.
pub trait ResultTagExt<T> {
    /// Wraps the error in tag `E`, keeping it as the inner cause.
    fn tag<E: Tag>(self) -> Result<T, TaggedError>;

    /// Wraps the error in tag `E` behind a lazily built message.
    ///
    /// The original error stays in the chain as the message's source, so it
    /// is still visible to chain queries but not rendered.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_tag::{namespace, tag, ResultTagExt};
    ///
    /// namespace!(pub ApiErr);
    /// tag!(pub Internal in ApiErr);
    ///
    /// let result: Result<(), &str> = Err("connection reset");
    /// let err = result.tag_with::<Internal, _, _>(|| format!("fetching user {}", 42)).unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "ApiErr::Internal: fetching user 42");
    /// ```
    fn tag_with<E, F, M>(self, message: F) -> Result<T, TaggedError>
    where
        E: Tag,
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>;
}

impl<T, X> ResultTagExt<T> for Result<T, X>
where
    X: Into<BoxError>,
{
    #[inline]
    fn tag<E: Tag>(self) -> Result<T, TaggedError> {
        self.map_err(|err| wrap::<E>(err))
    }

    #[inline]
    fn tag_with<E, F, M>(self, message: F) -> Result<T, TaggedError>
    where
        E: Tag,
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| wrap::<E>(Message::new(message()).with_source(err)))
    }
}
