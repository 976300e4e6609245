use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

/// Why a matcher stopped before completing its literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanError {
    /// The source could not produce the next code point. Carries the
    /// source's own message.
    #[error("could not read rune: {0}")]
    Read(String),
    /// A code point was produced but is not allowed at this position.
    #[error("{0}")]
    Syntax(String),
}

impl ScanError {
    pub(crate) fn read(source: &impl fmt::Display) -> Self {
        ScanError::Read(source.to_string())
    }

    /// Returns `true` for [`ScanError::Read`].
    #[must_use]
    pub fn is_read(&self) -> bool {
        matches!(self, ScanError::Read(_))
    }

    /// Returns `true` for [`ScanError::Syntax`].
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, ScanError::Syntax(_))
    }
}

/// A failed match: the text consumed before the failure, and the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct Partial {
    /// Code points consumed before the failure, in source order.
    pub matched: String,
    /// What went wrong.
    pub error: ScanError,
}

impl Partial {
    pub(crate) fn new(matched: impl Into<String>, error: ScanError) -> Self {
        Self {
            matched: matched.into(),
            error,
        }
    }

    pub(crate) fn read(matched: impl Into<String>, source: &impl fmt::Display) -> Self {
        Self::new(matched, ScanError::read(source))
    }

    pub(crate) fn syntax(matched: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(matched, ScanError::Syntax(message.into()))
    }

    /// Puts text consumed by an enclosing matcher in front of `matched`.
    #[must_use]
    pub(crate) fn prefixed(mut self, prefix: &str) -> Self {
        self.matched.insert_str(0, prefix);
        self
    }
}

/// The outcome of one matcher call.
///
/// `Ok` holds the full literal text; `Err` holds the consumed prefix along
/// with the reason matching stopped.
pub type Scan = Result<String, Partial>;

/// Accessors that treat a [`Scan`] as a `(text, error)` pair.
pub trait ScanExt {
    /// The consumed text, whether or not the match succeeded.
    fn text(&self) -> &str;

    /// Splits into the consumed text and the failure, if any.
    fn into_parts(self) -> (String, Option<ScanError>);
}

impl ScanExt for Scan {
    fn text(&self) -> &str {
        match self {
            Ok(text) => text,
            Err(partial) => &partial.matched,
        }
    }

    fn into_parts(self) -> (String, Option<ScanError>) {
        match self {
            Ok(text) => (text, None),
            Err(Partial { matched, error }) => (matched, Some(error)),
        }
    }
}

/// Emits one trace event for a failed match. Public matchers call this on
/// their final result, so `matched` is the prefix the caller gets back.
pub(crate) fn traced(scan: Scan) -> Scan {
    if let Err(partial) = &scan {
        tracing::trace!(
            matched = %partial.matched,
            error = %partial.error,
            "literal match failed"
        );
    }
    scan
}
