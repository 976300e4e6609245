use alloc::string::{String, ToString};

use rstest::rstest;

use crate::{
    Scan, StrSource, parse_escape_sequence, parse_false, parse_hex_code_point, parse_null,
    parse_number, parse_string, parse_true,
};

type Matcher = fn(&mut StrSource<'static>) -> Scan;

/// Runs `matcher` over `input` and returns the text plus what was left over.
fn scan(matcher: Matcher, input: &'static str) -> (String, &'static str) {
    let mut src = StrSource::new(input);
    let text = matcher(&mut src).unwrap_or_else(|e| panic!("{input:?} failed: {e} ({e:?})"));
    (text, src.rest())
}

#[rstest]
#[case::true_(parse_true as Matcher, "true")]
#[case::false_(parse_false as Matcher, "false")]
#[case::null(parse_null as Matcher, "null")]
fn keywords(#[case] matcher: Matcher, #[case] input: &'static str) {
    assert_eq!(scan(matcher, input), (input.to_string(), ""));
}

#[rstest]
#[case("0")]
#[case("-0")]
#[case("7")]
#[case("-1234567890")]
#[case("0.5")]
#[case("-0.5e+10")]
#[case("1E400")]
#[case("1e-0")]
#[case("3.14159E+00")]
#[case("10.000")]
#[case("123456789012345678901234567890")]
fn numbers_come_back_verbatim(#[case] input: &'static str) {
    assert_eq!(scan(parse_number, input), (input.to_string(), ""));
}

#[rstest]
#[case("0,", "0", ",")]
#[case("-12]", "-12", "]")]
#[case("1.5}", "1.5", "}")]
#[case("2e9 ", "2e9", " ")]
#[case("00", "0", "0")]
#[case("0123", "0", "123")]
#[case("1.2.3", "1.2", ".3")]
#[case("5e5e5", "5e5", "e5")]
fn numbers_stop_at_the_first_foreign_code_point(
    #[case] input: &'static str,
    #[case] expected: &str,
    #[case] rest: &str,
) {
    assert_eq!(scan(parse_number, input), (expected.to_string(), rest));
}

#[rstest]
#[case(r#""""#)]
#[case(r#""hello""#)]
#[case(r#""\"\\\/\b\f\n\r\t""#)]
#[case(r#""éé😀""#)]
#[case(r#""\uDEAD""#)]
#[case("\"é☃😀\"")]
#[case("\"\u{7F}\u{80}\u{2028}\"")]
#[case(r#""ends with backslash escape \\""#)]
fn strings_come_back_verbatim(#[case] input: &'static str) {
    assert_eq!(scan(parse_string, input), (input.to_string(), ""));
}

#[test]
fn string_stops_after_closing_quote() {
    assert_eq!(
        scan(parse_string, r#""key": "value""#),
        (r#""key""#.to_string(), r#": "value""#)
    );
}

#[rstest]
#[case(r"\u0000")]
#[case(r"\uFFFF")]
#[case(r"\uffff")]
#[case(r"\u12aB")]
fn unicode_escapes(#[case] input: &'static str) {
    assert_eq!(scan(parse_escape_sequence, input), (input.to_string(), ""));
}

#[test]
fn hex_code_point_leaves_fifth_code_point() {
    assert_eq!(scan(parse_hex_code_point, "0000z"), ("0000".to_string(), "z"));
}
