//! Extension trait for `Future<Output = Result<T, X>>`.
//!
//! Provides `.tag::<E>()` for futures, mirroring the sync
//! [`ResultTagExt`](crate::traits::ResultTagExt) trait.

use core::future::Future;

use crate::traits::Tag;

use super::tag_future::TagFuture;

/// Extension trait for tagging the errors of Result-returning futures.
///
/// # Examples
///
/// ```rust,no_run
/// use error_tag::prelude_async::*;
///
/// namespace!(pub FsErr);
/// tag!(pub NotFound in FsErr);
///
/// async fn read_from_disk(_path: &str) -> Result<String, std::io::Error> {
///     Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
/// }
///
/// async fn read(path: &str) -> TaggedResult<String> {
///     read_from_disk(path).tag::<NotFound>().await
/// }
/// ```
pub trait FutureTagExt<T, X>: Future<Output = Result<T, X>> + Sized {
    /// Wraps the future's error in tag `E` when it resolves.
    #[inline]
    fn tag<E: Tag>(self) -> TagFuture<Self, E> {
        TagFuture::new(self)
    }
}

impl<F, T, X> FutureTagExt<T, X> for F where F: Future<Output = Result<T, X>> {}
