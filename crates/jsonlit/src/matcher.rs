//! Building blocks shared by the literal grammars.

use alloc::{format, string::String};

use crate::{
    error::{Partial, Scan, traced},
    source::CharSource,
};

/// Reads `expected.len()` code points, each of which must equal the
/// corresponding code point of `expected`.
///
/// Stops at the first read failure or mismatch; the mismatching code point has
/// been consumed but is not part of the returned prefix.
///
/// # Errors
///
/// Returns the code points matched so far with a read or syntax failure.
pub fn match_exact<S: CharSource + ?Sized>(source: &mut S, expected: &str) -> Scan {
    traced(exact(source, expected))
}

fn exact<S: CharSource + ?Sized>(source: &mut S, expected: &str) -> Scan {
    let mut matched = String::with_capacity(expected.len());
    for want in expected.chars() {
        let found = source.read().map_err(|e| Partial::read(matched.as_str(), &e))?;
        if found != want {
            return Err(Partial::syntax(
                matched,
                format!("expected '{want}', found '{found}'"),
            ));
        }
        matched.push(found);
    }
    Ok(matched)
}

/// Consumes the next code point if it equals `expected`.
///
/// Returns the consumed code point as text, or an empty string when the next
/// code point differs or none is available. Never fails.
pub fn match_if<S: CharSource + ?Sized>(source: &mut S, expected: char) -> String {
    let mut matched = String::new();
    if source.peek().is_ok_and(|ch| ch == expected) && source.read().is_ok() {
        matched.push(expected);
    }
    matched
}

/// Consumes code points while they fall within `low..=high`.
///
/// Stops without error at the first code point outside the range or when the
/// source is exhausted. The result may be empty.
pub fn match_while_in_range<S: CharSource + ?Sized>(
    source: &mut S,
    low: char,
    high: char,
) -> String {
    let mut matched = String::new();
    while let Ok(ch) = source.peek() {
        if !(low..=high).contains(&ch) || source.read().is_err() {
            break;
        }
        matched.push(ch);
    }
    matched
}
