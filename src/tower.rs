//! Tower integration for error-tag.
//!
//! This module provides Tower `Layer` and `Service` implementations that
//! wrap every error a service produces in one tag, making it easy to mark
//! which boundary a failure crossed.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-tag = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_tag::tower::TagLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(TagLayer::<Gateway>::new())
//!     .service(my_service);
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::task::{Context, Poll};

use tower::{Layer, Service};

use crate::async_ext::TagFuture;
use crate::traits::Tag;
use crate::types::{wrap, BoxError, TaggedError};

/// A Tower [`Layer`] that wraps service errors in tag `E`.
pub struct TagLayer<E> {
    _tag: PhantomData<fn() -> E>,
}

impl<E> TagLayer<E> {
    /// Creates a new `TagLayer`.
    #[inline]
    pub const fn new() -> Self {
        Self { _tag: PhantomData }
    }
}

impl<E> Default for TagLayer<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for TagLayer<E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TagLayer<E> {}

impl<E: Tag> fmt::Debug for TagLayer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagLayer").field("tag", &format_args!("{}", crate::TagId::of::<E>())).finish()
    }
}

impl<S, E> Layer<S> for TagLayer<E> {
    type Service = TagService<S, E>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        TagService::new(inner)
    }
}

/// A Tower [`Service`] that wraps errors in tag `E`.
///
/// This is created by [`TagLayer`] and wraps an inner service. Errors from
/// both `poll_ready` and the response future are tagged.
pub struct TagService<S, E> {
    inner: S,
    _tag: PhantomData<fn() -> E>,
}

impl<S, E> TagService<S, E> {
    /// Creates a new `TagService` wrapping the given service.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner, _tag: PhantomData }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Clone, E> Clone for TagService<S, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<S: fmt::Debug, E: Tag> fmt::Debug for TagService<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagService")
            .field("inner", &self.inner)
            .field("tag", &format_args!("{}", crate::TagId::of::<E>()))
            .finish()
    }
}

impl<S, E, Request> Service<Request> for TagService<S, E>
where
    S: Service<Request>,
    S::Error: Into<BoxError>,
    E: Tag,
{
    type Response = S::Response;
    type Error = TaggedError;
    type Future = TagFuture<S::Future, E>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| wrap::<E>(err))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        TagFuture::new(self.inner.call(request))
    }
}

/// Extension trait for easily tagging a service's errors.
pub trait ServiceTagExt<Request>: Service<Request> + Sized {
    /// Wraps this service so all of its errors carry tag `E`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_tag::tower::ServiceTagExt;
    ///
    /// let wrapped = my_service.tagged::<DatabaseLayer>();
    /// ```
    #[inline]
    fn tagged<E: Tag>(self) -> TagService<Self, E> {
        TagService::new(self)
    }
}

impl<S, Request> ServiceTagExt<Request> for S where S: Service<Request> {}
