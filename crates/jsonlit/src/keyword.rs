use crate::{error::Scan, matcher::match_exact, source::CharSource};

/// Matches the keyword `true`.
///
/// # Errors
///
/// See [`match_exact`].
pub fn parse_true<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    match_exact(source, "true")
}

/// Matches the keyword `false`.
///
/// # Errors
///
/// See [`match_exact`].
pub fn parse_false<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    match_exact(source, "false")
}

/// Matches the keyword `null`.
///
/// # Errors
///
/// See [`match_exact`].
pub fn parse_null<S: CharSource + ?Sized>(source: &mut S) -> Scan {
    match_exact(source, "null")
}
