use core::error::Error;
use core::fmt;

use crate::types::alloc_type::Cow;
use crate::types::BoxError;

/// A plain message error, optionally carrying the error that caused it.
///
/// Used as the inner link of formatted tagged errors. When a source is
/// attached it stays in the chain, so queries against the outer error still
/// see any tags the source carries. Only the message is rendered.
///
/// # Examples
///
/// ```
/// use error_tag::{namespace, tag, wrap, ErrorChainExt, Message};
///
/// namespace!(pub FsErr; pub ApiErr);
/// tag!(pub NotFound in FsErr; pub Internal in ApiErr);
///
/// let cause = wrap::<NotFound>("no such file");
/// let err = wrap::<Internal>(Message::new("read failed").with_source(cause));
///
/// assert_eq!(err.to_string(), "ApiErr::Internal: read failed");
/// assert!(err.has_tag::<NotFound>());
/// ```
#[derive(Debug)]
pub struct Message {
    text: Cow<'static, str>,
    source: Option<BoxError>,
}

impl Message {
    /// Creates a message without a source.
    #[inline]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into(), source: None }
    }

    /// Attaches the error that caused this message.
    #[inline]
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the message text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Message {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Error for Message {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}
