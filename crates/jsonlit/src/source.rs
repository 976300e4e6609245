//! Peekable code-point sources the matchers read from.
//!
//! A source hands out one `char` at a time. `peek()` never advances and may be
//! called any number of times; `read()` advances by exactly one code point and
//! returns what the preceding `peek()` (if any) returned. Position is owned by
//! the source alone, so two matchers must not share one source concurrently.

use thiserror::Error;

/// Why a [`CharSource`] could not produce a code point.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The input is exhausted.
    #[error("EOF")]
    EndOfInput,
    /// The bytes at the current position are not valid UTF-8. Carries the
    /// first offending byte.
    #[error("invalid UTF-8 byte 0x{0:02X}")]
    InvalidUtf8(u8),
    /// The underlying reader failed.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A forward-only stream of code points with one code point of lookahead.
pub trait CharSource {
    /// Returns the next code point without consuming it.
    ///
    /// # Errors
    ///
    /// Fails when no code point is available.
    fn peek(&mut self) -> Result<char, SourceError>;

    /// Consumes and returns the next code point.
    ///
    /// # Errors
    ///
    /// Fails when no code point is available.
    fn read(&mut self) -> Result<char, SourceError>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn peek(&mut self) -> Result<char, SourceError> {
        (**self).peek()
    }

    fn read(&mut self) -> Result<char, SourceError> {
        (**self).read()
    }
}

/// An in-memory source over a string slice.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> StrSource<'a> {
    /// Creates a source positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The input not yet consumed.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(input: &'a str) -> Self {
        Self::new(input)
    }
}

impl CharSource for StrSource<'_> {
    fn peek(&mut self) -> Result<char, SourceError> {
        self.rest().chars().next().ok_or(SourceError::EndOfInput)
    }

    fn read(&mut self) -> Result<char, SourceError> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        Ok(ch)
    }
}

/// An in-memory source over bytes that are expected to be UTF-8.
///
/// Invalid sequences are reported as [`SourceError::InvalidUtf8`]; reading
/// one skips the maximal invalid subpart so that scanning can move on.
#[derive(Debug, Clone)]
pub struct ByteSource<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> ByteSource<'a> {
    /// Creates a source positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The input not yet consumed.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }

    fn decode(&self) -> (Result<char, SourceError>, usize) {
        let rest = self.rest();
        let Some(&first) = rest.first() else {
            return (Err(SourceError::EndOfInput), 0);
        };
        match bstr::decode_utf8(rest) {
            (Some(ch), size) => (Ok(ch), size),
            (None, size) => (Err(SourceError::InvalidUtf8(first)), size.max(1)),
        }
    }
}

impl CharSource for ByteSource<'_> {
    fn peek(&mut self) -> Result<char, SourceError> {
        self.decode().0
    }

    fn read(&mut self) -> Result<char, SourceError> {
        let (result, size) = self.decode();
        self.offset += size;
        result
    }
}
