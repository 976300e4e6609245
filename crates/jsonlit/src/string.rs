//! Quoted strings, escape sequences and `\u` code points.
//!
//! Escapes are recognized, not decoded: the matched text spells them exactly
//! as they appeared. `\u` escapes are checked for four hexadecimal digits only;
//! surrogate pairing is left to whoever decodes the text.
//!
//! When an escape or a code point is rejected because of a bad character, that
//! character has already been read from the source but is not part of the
//! returned prefix. Callers computing error locations from the prefix length
//! point at exactly that character.

use alloc::{format, string::String};

use crate::{
    error::{Partial, Scan, traced},
    source::CharSource,
};

/// Matches a double-quoted string, including both quotes.
///
/// ```rust
/// use jsonlit::{StrSource, parse_string};
///
/// let mut src = StrSource::new(r#""a\"bé": 1"#);
/// assert_eq!(parse_string(&mut src).unwrap(), r#""a\"bé""#);
/// assert_eq!(src.rest(), ": 1");
/// ```
///
/// # Errors
///
/// Fails when the opening quote is missing, on an unescaped control
/// character, on a malformed escape, or when the input ends before the
/// closing quote.
pub fn parse_string<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    traced(string(source))
}

fn string<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    let open = source.read().map_err(|e| Partial::read("", &e))?;
    if open != '"' {
        return Err(Partial::syntax(
            "",
            format!("expected '\"' to begin string, found '{open}'"),
        ));
    }
    let mut text = String::from(open);

    loop {
        let ch = match source.peek() {
            Ok(ch) => ch,
            Err(e) => return Err(Partial::read(text, &e)),
        };
        match ch {
            '"' => {
                source.read().map_err(|e| Partial::read(text.as_str(), &e))?;
                text.push(ch);
                return Ok(text);
            }
            '\\' => match escape_sequence(source) {
                Ok(escape) => text.push_str(&escape),
                Err(partial) => return Err(partial.prefixed(&text)),
            },
            _ if is_control_character(ch) => {
                return Err(Partial::syntax(
                    text,
                    format!("unexpected control character 0x{:X}", u32::from(ch)),
                ));
            }
            _ => {
                source.read().map_err(|e| Partial::read(text.as_str(), &e))?;
                text.push(ch);
            }
        }
    }
}

/// Matches one escape sequence starting at `\`.
///
/// # Errors
///
/// Fails when the sequence does not start with `\`, when the escaped
/// character is not one of `"`, `\`, `/`, `b`, `f`, `n`, `r`, `t`, `u`, or
/// when a `\u` escape is not followed by four hexadecimal digits.
pub fn parse_escape_sequence<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    traced(escape_sequence(source))
}

fn escape_sequence<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    let backslash = source.read().map_err(|e| Partial::read("", &e))?;
    if backslash != '\\' {
        return Err(Partial::syntax(
            "",
            format!("expected '\\' at beginning of escape sequence, found '{backslash}'"),
        ));
    }

    let escaped = source.read().map_err(|e| Partial::read("\\", &e))?;
    match escaped {
        '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' => Ok(format!("\\{escaped}")),
        'u' => match hex_code_point(source) {
            Ok(digits) => Ok(format!("\\u{digits}")),
            Err(partial) => Err(partial.prefixed("\\u")),
        },
        _ => Err(Partial::syntax(
            "\\",
            format!("invalid escape sequence character '{escaped}'"),
        )),
    }
}

/// Matches exactly four hexadecimal digits, in either case.
///
/// # Errors
///
/// Fails on the first code point that cannot be read or is not a hexadecimal
/// digit, keeping the digits before it.
pub fn parse_hex_code_point<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    traced(hex_code_point(source))
}

fn hex_code_point<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    let mut digits = String::with_capacity(4);
    for _ in 0..4 {
        let ch = source.read().map_err(|e| Partial::read(digits.as_str(), &e))?;
        if !is_hex_digit(ch) {
            return Err(Partial::syntax(
                digits,
                format!("invalid hexadecimal character in code point '{ch}'"),
            ));
        }
        digits.push(ch);
    }
    Ok(digits)
}

/// `U+0000` through `U+001F`, which must be escaped inside strings.
#[must_use]
pub fn is_control_character(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{1F}')
}

/// `0`-`9`, `a`-`f` and `A`-`F`.
#[must_use]
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}
