//! Incremental recognizers for the scalar literals of JSON.
//!
//! Each matcher pulls code points one at a time from a [`CharSource`] and
//! returns the exact text it consumed. On failure the consumed prefix is kept
//! and travels with the error inside a [`Partial`]:
//!
//! ```rust
//! use jsonlit::{ScanError, StrSource, parse_number, parse_true};
//!
//! let mut src = StrSource::new("-0.5e+10,");
//! assert_eq!(parse_number(&mut src).unwrap(), "-0.5e+10");
//! assert_eq!(src.rest(), ",");
//!
//! let err = parse_true(&mut StrSource::new("tru")).unwrap_err();
//! assert_eq!(err.matched, "tru");
//! assert_eq!(err.error, ScanError::Read("EOF".into()));
//! ```
//!
//! Matched text is never decoded or normalized: escapes keep their spelling
//! and numbers keep every digit, sign and exponent marker as written.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod keyword;
mod matcher;
mod number;
mod position;
mod source;
mod string;

#[cfg(feature = "std")]
mod reader;

#[cfg(test)]
mod tests;

pub use error::{Partial, Scan, ScanError, ScanExt};
pub use keyword::{parse_false, parse_null, parse_true};
pub use matcher::{match_exact, match_if, match_while_in_range};
pub use number::{parse_exponent, parse_integer_part, parse_number};
pub use position::{Position, Positioned};
pub use source::{ByteSource, CharSource, SourceError, StrSource};
pub use string::{
    is_control_character, is_hex_digit, parse_escape_sequence, parse_hex_code_point, parse_string,
};

#[cfg(feature = "std")]
pub use reader::ReaderSource;
