use crate::source::{CharSource, SourceError};

/// Location of the next unread code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Code points read so far.
    pub offset: usize,
    /// One-based line number.
    pub line: usize,
    /// One-based column, counted in code points.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

/// Wraps a source and keeps track of where it is.
///
/// Only successful reads move the position. Combined with the prefix carried
/// by a [`Partial`](crate::Partial) this is enough to point at the exact code
/// point a matcher stopped on:
///
/// ```rust
/// use jsonlit::{Positioned, StrSource, parse_string};
///
/// let mut src = Positioned::new(StrSource::new("\"ok\\x\""));
/// let start = src.position();
/// let err = parse_string(&mut src).unwrap_err();
/// assert_eq!(start.column + err.matched.chars().count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Positioned<S> {
    inner: S,
    position: Position,
}

impl<S: CharSource> Positioned<S> {
    /// Starts tracking at line 1, column 1.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            position: Position::default(),
        }
    }

    /// Where the next `read()` will land.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Gives back the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: CharSource> CharSource for Positioned<S> {
    fn peek(&mut self) -> Result<char, SourceError> {
        self.inner.peek()
    }

    fn read(&mut self) -> Result<char, SourceError> {
        let ch = self.inner.read()?;
        self.position.offset += 1;
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Ok(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StrSource, parse_number};

    #[test]
    fn tracks_lines_and_columns() {
        let mut src = Positioned::new(StrSource::new("a\nbc"));
        src.read().unwrap();
        assert_eq!(
            src.position(),
            Position {
                offset: 1,
                line: 1,
                column: 2
            }
        );
        src.read().unwrap();
        src.read().unwrap();
        assert_eq!(
            src.position(),
            Position {
                offset: 3,
                line: 2,
                column: 2
            }
        );
    }

    #[test]
    fn peek_and_failed_reads_do_not_move() {
        let mut src = Positioned::new(StrSource::new("1"));
        src.peek().unwrap();
        src.peek().unwrap();
        assert_eq!(src.position(), Position::default());
        assert_eq!(parse_number(&mut src).unwrap(), "1");
        assert!(src.read().is_err());
        assert_eq!(src.position().offset, 1);
        assert!(src.into_inner().rest().is_empty());
    }
}
