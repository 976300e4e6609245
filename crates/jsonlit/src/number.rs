//! `number := '-'? intpart ('.' digit+)? (('e'|'E') ('+'|'-')? digit+)?`

use alloc::{format, string::String};

use crate::{
    error::{Partial, Scan, traced},
    matcher::{match_if, match_while_in_range},
    source::CharSource,
};

/// Matches a JSON number.
///
/// The fraction and exponent are optional: running out of input, or meeting
/// any other code point, after the integer part or the fraction digits ends
/// the number successfully.
///
/// ```rust
/// use jsonlit::{StrSource, parse_number};
///
/// let mut src = StrSource::new("12.50E-3]");
/// assert_eq!(parse_number(&mut src).unwrap(), "12.50E-3");
/// assert_eq!(src.rest(), "]");
/// ```
///
/// # Errors
///
/// Fails when the integer part is missing, when `.` is not followed by a
/// digit, or when the exponent is malformed. The text matched before the
/// failure is kept.
pub fn parse_number<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    traced(number(source))
}

fn number<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    let mut text = match_if(source, '-');

    let digits = integer_part(source).map_err(|p| p.prefixed(&text))?;
    text.push_str(&digits);

    let Ok(mut next) = source.peek() else {
        return Ok(text);
    };

    if next == '.' {
        text.push_str(&match_if(source, '.'));
        let fraction = match_while_in_range(source, '0', '9');
        if fraction.is_empty() {
            return Err(Partial::syntax(text, "expected digit in number after decimal"));
        }
        text.push_str(&fraction);

        match source.peek() {
            Ok(ch) => next = ch,
            Err(_) => return Ok(text),
        }
    }

    if matches!(next, 'e' | 'E') {
        let suffix = exponent(source).map_err(|p| p.prefixed(&text))?;
        text.push_str(&suffix);
    }

    Ok(text)
}

/// Matches the integer part of a number.
///
/// A leading `0` is the whole integer part; any digits after it are left in
/// the source. Otherwise a non-zero digit starts a run of digits.
///
/// # Errors
///
/// Fails when the next code point is not a digit or cannot be read.
pub fn parse_integer_part<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    traced(integer_part(source))
}

fn integer_part<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    let first = source.peek().map_err(|e| Partial::read("", &e))?;
    match first {
        '0' => {
            source.read().map_err(|e| Partial::read("", &e))?;
            Ok(String::from("0"))
        }
        '1'..='9' => Ok(match_while_in_range(source, '0', '9')),
        _ => Err(Partial::syntax("", format!("expected digit, found '{first}'"))),
    }
}

/// Matches an exponent: `e` or `E`, an optional sign, then at least one digit.
///
/// # Errors
///
/// Fails when the marker is missing, when nothing can be read after it, or
/// when no digit follows the marker and optional sign.
pub fn parse_exponent<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    traced(exponent(source))
}

fn exponent<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    let marker = source.peek().map_err(|e| Partial::read("", &e))?;
    if !matches!(marker, 'e' | 'E') {
        return Err(Partial::syntax("", format!("expected 'e' or 'E', found '{marker}'")));
    }
    source.read().map_err(|e| Partial::read("", &e))?;
    let mut text = String::from(marker);

    let next = source.peek().map_err(|e| Partial::read(text.as_str(), &e))?;
    let signed = matches!(next, '+' | '-');
    if signed {
        source.read().map_err(|e| Partial::read(text.as_str(), &e))?;
        text.push(next);
    }

    let digits = match_while_in_range(source, '0', '9');
    if digits.is_empty() {
        let message = if signed {
            "expected digit in exponent"
        } else {
            "expected '+', '-', or digit in exponent"
        };
        return Err(Partial::syntax(text, message));
    }
    text.push_str(&digits);

    Ok(text)
}
