#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jsonlit::{
    ByteSource, Scan, ScanExt, parse_escape_sequence, parse_false, parse_hex_code_point, parse_null,
    parse_number, parse_string, parse_true,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Input<'a> {
    /// Arbitrary bytes through one matcher.
    Raw { matcher: u8, bytes: &'a [u8] },
    /// A number as serde_json prints it.
    Number(f64),
    /// A string as serde_json quotes it.
    Text(String),
}

type Matcher = fn(&mut ByteSource<'_>) -> Scan;

const MATCHERS: [Matcher; 7] = [
    |s| parse_true(s),
    |s| parse_false(s),
    |s| parse_null(s),
    |s| parse_number(s),
    |s| parse_string(s),
    |s| parse_escape_sequence(s),
    |s| parse_hex_code_point(s),
];

fn raw(matcher: u8, bytes: &[u8]) {
    let mut src = ByteSource::new(bytes);
    let scanned = MATCHERS[usize::from(matcher) % MATCHERS.len()](&mut src);
    let text = scanned.text();
    // Whatever was matched was consumed, verbatim, from the front of the input.
    assert!(text.len() <= src.offset());
    assert!(bytes.starts_with(text.as_bytes()));
}

fn exact(matcher: Matcher, text: &str) {
    let mut src = ByteSource::new(text.as_bytes());
    assert_eq!(matcher(&mut src).as_deref(), Ok(text));
    assert!(src.rest().is_empty());
}

fn literals(data: &[u8]) {
    let Ok(input) = Input::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };
    match input {
        Input::Raw { matcher, bytes } => raw(matcher, bytes),
        Input::Number(n) if n.is_finite() => {
            if let Ok(text) = serde_json::to_string(&n) {
                exact(MATCHERS[3], &text);
            }
        }
        Input::Number(_) => {}
        Input::Text(s) => {
            if let Ok(text) = serde_json::to_string(&s) {
                exact(MATCHERS[4], &text);
            }
        }
    }
}

fuzz_target!(|data: &[u8]| literals(data));
