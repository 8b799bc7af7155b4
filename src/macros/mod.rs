//! Declaration macros for namespaces and tags, plus a formatting shorthand.
//!
//! - [`macro@crate::namespace`] - Declares zero-state namespace marker types.
//! - [`macro@crate::tag`] - Declares tag marker types inside a namespace.
//! - [`macro@crate::tagged`] - Builds a tagged error from a format string,
//!   optionally keeping a source error in the chain.
//!
//! Both declaration macros take the identity from the declared type's own
//! identifier, so `tag!(pub TooHot in PorridgeErrs)` renders as
//! `PorridgeErrs::TooHot`.
//!
//! # Examples
//!
//! ```
//! use error_tag::{namespace, tag, tagged};
//!
//! namespace! {
//!     /// Errors from the porridge station.
//!     pub PorridgeErrs;
//!     pub ChairErrs;
//! }
//!
//! tag! {
//!     pub TooHot in PorridgeErrs;
//!     pub TooCold in PorridgeErrs;
//!     pub TooSmall in ChairErrs;
//! }
//!
//! let err = tagged!(TooSmall, "cannot fit {} bears", 3);
//! assert_eq!(err.to_string(), "ChairErrs::TooSmall: cannot fit 3 bears");
//! ```

/// Declares one or more namespace marker types.
///
/// Each declaration produces a unit struct and a
/// [`Namespace`](crate::traits::Namespace) implementation whose `NAME` is the
/// struct's identifier. Attributes and doc comments are forwarded.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, traits::Namespace};
///
/// namespace!(pub FsErr);
/// namespace! {
///     pub(crate) ApiErr;
///     #[allow(non_camel_case_types)]
///     bedErrs;
/// }
///
/// assert_eq!(FsErr::NAME, "FsErr");
/// assert_eq!(bedErrs::NAME, "bedErrs");
/// ```
#[macro_export]
macro_rules! namespace {
    ($($(#[$meta:meta])* $vis:vis $name:ident);+ $(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::traits::Namespace for $name {
                const NAME: &'static str = ::core::stringify!($name);
            }
        )+
    };
}

/// Declares one or more tag marker types inside a namespace.
///
/// Written as `Name in Namespace`. Each declaration produces a unit struct
/// and a [`Tag`](crate::traits::Tag) implementation whose `NAME` is the
/// struct's identifier. A tag names exactly one namespace.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, TagId};
///
/// namespace!(pub FsErr);
/// tag! {
///     /// Path outside of the readable area.
///     pub Unsupported in FsErr;
///     pub NotFound in FsErr;
/// }
///
/// assert_eq!(TagId::of::<NotFound>().to_string(), "FsErr::NotFound");
/// ```
#[macro_export]
macro_rules! tag {
    ($($(#[$meta:meta])* $vis:vis $name:ident in $namespace:ty);+ $(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::traits::Tag for $name {
                type Namespace = $namespace;
                const NAME: &'static str = ::core::stringify!($name);
            }
        )+
    };
}

/// Builds a [`TaggedError`](crate::TaggedError) from a format string.
///
/// `tagged!(Tag, "fmt", args..)` is [`formatted`](crate::formatted) with
/// `format_args!`. `tagged!(Tag, source = err, "fmt", args..)` additionally
/// keeps `err` in the chain beneath the message, so tags it carries remain
/// visible to queries. The source is moved after the message is formatted,
/// so the format arguments may borrow it.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, tagged, ErrorChainExt};
///
/// namespace!(pub ApiErr; pub FsErr);
/// tag!(pub Internal in ApiErr; pub NotFound in FsErr);
///
/// let cause = tagged!(NotFound, "file not found: {:?}", "/tmp/missing");
/// let err = tagged!(Internal, source = cause, "a + b = {} resulted in error: {}", 1, cause);
///
/// assert_eq!(
///     err.to_string(),
///     "ApiErr::Internal: a + b = 1 resulted in error: FsErr::NotFound: file not found: \"/tmp/missing\""
/// );
/// assert!(err.has_tag::<NotFound>());
/// ```
#[macro_export]
macro_rules! tagged {
    ($tag:ty, source = $source:expr, $($arg:tt)+) => {{
        let message = $crate::types::alloc_type::format(::core::format_args!($($arg)+));
        $crate::wrap::<$tag>($crate::Message::new(message).with_source($source))
    }};
    ($tag:ty, $($arg:tt)+) => {
        $crate::formatted::<$tag>(::core::format_args!($($arg)+))
    };
}
