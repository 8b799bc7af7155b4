//! Future wrapper that tags errors on resolution.

use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::Tag;
use crate::types::{wrap, BoxError, TaggedError};

pin_project! {
    /// A Future wrapper that wraps its error in tag `E`.
    ///
    /// Nothing is allocated unless the inner future resolves to an error.
    ///
    /// # Cancel Safety
    ///
    /// `TagFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_tag::prelude_async::*;
    ///
    /// namespace!(pub ApiErr);
    /// tag!(pub Internal in ApiErr);
    ///
    /// async fn example() -> TaggedResult<i32> {
    ///     async { Err::<i32, _>("failed") }
    ///         .tag::<Internal>()
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct TagFuture<Fut, E> {
        #[pin]
        future: Fut,
        _tag: PhantomData<fn() -> E>,
    }
}

impl<Fut, E> TagFuture<Fut, E> {
    /// Creates a new `TagFuture` around the given future.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, _tag: PhantomData }
    }
}

impl<Fut, E, T, X> Future for TagFuture<Fut, E>
where
    Fut: Future<Output = Result<T, X>>,
    X: Into<BoxError>,
    E: Tag,
{
    type Output = Result<T, TaggedError>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| res.map_err(|err| wrap::<E>(err)))
    }
}

impl<Fut, E, T, X> FusedFuture for TagFuture<Fut, E>
where
    Fut: FusedFuture<Output = Result<T, X>>,
    X: Into<BoxError>,
    E: Tag,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}
