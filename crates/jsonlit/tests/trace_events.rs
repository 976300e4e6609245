#![allow(missing_docs)]

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use jsonlit::{StrSource, parse_escape_sequence, parse_number, parse_string, parse_true};
use tracing::{
    Event, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Failure {
    matched: String,
    error: String,
}

impl Visit for Failure {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "matched" => self.matched = format!("{value:?}"),
            "error" => self.error = format!("{value:?}"),
            _ => {}
        }
    }
}

/// Collects the `matched` and `error` fields of every event.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Failure>>>);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut failure = Failure::default();
        event.record(&mut failure);
        self.0.lock().unwrap().push(failure);
    }
}

fn failures<T>(scan: impl FnOnce() -> T) -> (T, Vec<Failure>) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, scan);
    let events = recorder.0.lock().unwrap().clone();
    (result, events)
}

#[test]
fn string_failure_logs_the_returned_prefix() {
    let (scan, events) = failures(|| parse_string(&mut StrSource::new("\"ab\\u12G4\"")));
    let err = scan.unwrap_err();
    assert_eq!(err.matched, "\"ab\\u12");
    assert_eq!(
        events,
        vec![Failure {
            matched: "\"ab\\u12".into(),
            error: "invalid hexadecimal character in code point 'G'".into(),
        }]
    );
}

#[test]
fn exponent_failure_logs_the_whole_number_prefix() {
    let (scan, events) = failures(|| parse_number(&mut StrSource::new("-1.5e")));
    assert_eq!(scan.unwrap_err().matched, "-1.5e");
    assert_eq!(
        events,
        vec![Failure {
            matched: "-1.5e".into(),
            error: "could not read rune: EOF".into(),
        }]
    );
}

#[test]
fn escape_and_keyword_failures_log_once() {
    let (_, events) = failures(|| parse_escape_sequence(&mut StrSource::new("\\u0")));
    assert_eq!(
        events,
        vec![Failure {
            matched: "\\u0".into(),
            error: "could not read rune: EOF".into(),
        }]
    );

    let (_, events) = failures(|| parse_true(&mut StrSource::new("trap")));
    assert_eq!(
        events,
        vec![Failure {
            matched: "tr".into(),
            error: "expected 'u', found 'a'".into(),
        }]
    );
}

#[test]
fn successful_matches_log_nothing() {
    let (scan, events) = failures(|| parse_string(&mut StrSource::new("\"\\u00e9\"")));
    assert_eq!(scan.unwrap(), "\"\\u00e9\"");
    assert!(events.is_empty());
}
