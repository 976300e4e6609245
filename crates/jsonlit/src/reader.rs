use alloc::vec::Vec;
use std::io::{BufRead, ErrorKind};

use crate::source::{CharSource, SourceError};

/// A source that decodes UTF-8 incrementally from a [`BufRead`].
///
/// Bytes are pulled from the reader only as far as needed to produce the next
/// code point, so a code point split across two buffer refills is still
/// decoded whole.
///
/// ```rust
/// use jsonlit::{ReaderSource, parse_string};
///
/// let mut src = ReaderSource::new(&b"\"caf\xC3\xA9\" rest"[..]);
/// assert_eq!(parse_string(&mut src).unwrap(), "\"café\"");
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    pending: Vec<u8>,
    eof: bool,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::with_capacity(4),
            eof: false,
        }
    }

    /// Gives back the reader. Bytes already pulled for lookahead are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decodes the next code point without consuming it, returning how many
    /// pending bytes it spans.
    fn decode(&mut self) -> (Result<char, SourceError>, usize) {
        loop {
            if self.pending.is_empty() {
                if self.eof {
                    return (Err(SourceError::EndOfInput), 0);
                }
            } else {
                let (ch, size) = bstr::decode_utf8(&self.pending);
                if let Some(ch) = ch {
                    return (Ok(ch), size);
                }
                // A valid but incomplete prefix can still be finished by more
                // input; anything else is an invalid sequence.
                if size < self.pending.len() || self.eof {
                    return (Err(SourceError::InvalidUtf8(self.pending[0])), size.max(1));
                }
            }
            if let Err(e) = self.fill() {
                return (Err(e), 0);
            }
        }
    }

    fn fill(&mut self) -> Result<(), SourceError> {
        let available = match self.reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        if available.is_empty() {
            self.eof = true;
            return Ok(());
        }
        let take = available.len().min(4 - self.pending.len());
        self.pending.extend_from_slice(&available[..take]);
        self.reader.consume(take);
        Ok(())
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn peek(&mut self) -> Result<char, SourceError> {
        self.decode().0
    }

    fn read(&mut self) -> Result<char, SourceError> {
        let (result, size) = self.decode();
        self.pending.drain(..size);
        result
    }
}
