use std::sync::Arc;
use std::thread;

use super::*;

#[test]
fn test_measure_returns_result() {
    let timings = Timings::new();
    assert!(timings.measure(Variant::Utf8, || wildcard::matches(b"*ccd", b"abcccd")));
    assert!(!timings.measure(Variant::Utf8Bounded, || wildcard::matches_bounded(b"abc", b"abcd", 3, 4)));
    assert_eq!(timings.calls(Variant::Utf8), 1);
    assert_eq!(timings.calls(Variant::Utf8Bounded), 1);
    assert_eq!(timings.calls(Variant::Ascii), 0);
}

#[test]
fn test_record_accumulates() {
    let timings = Timings::new();
    timings.record(Variant::Ascii, Duration::from_micros(3));
    timings.record(Variant::Ascii, Duration::from_micros(4));
    assert_eq!(timings.total(Variant::Ascii), Duration::from_micros(7));
    assert_eq!(timings.calls(Variant::Ascii), 2);
    assert_eq!(timings.total(Variant::Utf8), Duration::ZERO);
}

#[test]
fn test_reset() {
    let timings = Timings::new();
    timings.record(Variant::Utf8, Duration::from_millis(1));
    timings.reset();
    assert_eq!(timings.total(Variant::Utf8), Duration::ZERO);
    assert_eq!(timings.calls(Variant::Utf8), 0);
}

#[test]
fn test_shared_between_threads() {
    let timings = Arc::new(Timings::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let timings = timings.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    timings.measure(Variant::Ascii, || wildcard::matches_ascii(b"*a?b", b"caaab"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(timings.calls(Variant::Ascii), 400);
}

#[test]
fn test_report_does_not_panic() {
    let timings = Timings::new();
    timings.report();
    timings.record(Variant::Utf8Bounded, Duration::from_nanos(1));
    timings.report();
}

#[test]
fn test_variant_names() {
    let names: Vec<_> = Variant::iter().map(|v| v.as_ref().to_owned()).collect();
    assert_eq!(names, vec!["ascii", "utf8", "utf8-bounded"]);
}
