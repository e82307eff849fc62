use rstest::rstest;

use super::*;
use crate::case::{Case, IgnoreAsciiCase};
use crate::engine::matches_with;

#[rstest]
#[case(b"", b"", true)]
#[case(b"*", b"", true)]
#[case(b"?", b"", false)]
#[case(b"Hi*", b"Hi", true)]
#[case(b"ab*d", b"abc", false)]
#[case(b"*ccd", b"abcccd", true)]
#[case(b"*issip*ss*", b"mississipissippi", true)]
#[case(b"a*zz*", b"aaazz", true)]
#[case(b"?*?", b"ab", true)]
#[case(b"??", b"a", false)]
#[case(b"*?", b"", false)]
#[case(b"*", b"*", true)]
fn test_matches_ascii(#[case] pattern: &[u8], #[case] subject: &[u8], #[case] expected: bool) {
    assert_eq!(matches_ascii(pattern, subject), expected);
}

#[test]
fn test_units_are_characters() {
    // every unit counts as one character, whatever its value
    let subject = "ä".as_bytes();
    assert!(matches_ascii(b"??", subject));
    assert!(!matches_ascii(b"?", subject));
    assert!(matches_ascii(b"?\xA4", subject));
}

#[test]
fn test_seek_stops_at_terminator() {
    assert!(!matches_ascii(b"*x", b"abc\0x"));
    assert!(matches_ascii(b"*c", b"abc\0x"));
    assert!(!matches_ascii(b"a*x*", b"a\0xx"));
    assert!(matches_ascii(b"a*b\0garbage", b"axxb"));
}

#[test]
fn test_seek_repeatedly() {
    assert!(matches_ascii(b"*ab*xy", b"aXabYababxy"));
    assert!(!matches_ascii(b"*ab*xy", b"ababab"));
    assert!(matches_ascii(b"*foo*bar", b"foofoofoobar"));
    assert!(!matches_ascii(b"*foo*baz", b"foofoofoobar"));
}

#[rstest]
#[case(b"*SIP*", b"mississippi", true)]
#[case(b"*sip*", b"MISSISSIPPI", true)]
#[case(b"bLaH", b"BlAh", true)]
#[case(b"*x", b"abcX", true)]
#[case(b"*x", b"abc", false)]
#[case(b"a?C", b"AbC", true)]
fn test_ignore_ascii_case(#[case] pattern: &[u8], #[case] subject: &[u8], #[case] expected: bool) {
    assert_eq!(matches_ascii_with(IgnoreAsciiCase, pattern, subject), expected);
    assert_eq!(matches_ascii_with(Case::Insensitive, pattern, subject), expected);
}

#[test]
fn test_case_sensitive_by_default() {
    assert!(!matches_ascii(b"*SIP*", b"mississippi"));
    assert!(!matches_ascii_with(Case::Sensitive, b"bLaH", b"bLah"));
}

/// Folds every ASCII digit into `0`.
#[derive(Clone, Copy)]
struct AnyDigit;

impl Equivalence for AnyDigit {
    fn fold(self, unit: u8) -> u8 {
        if unit.is_ascii_digit() { b'0' } else { unit }
    }
}

#[rstest]
#[case(b"*5", b"x7", true)]
#[case(b"*5", b"x7y", false)]
#[case(b"a*1*2", b"a93b48", true)]
#[case(b"*9z", b"4z", true)]
#[case(b"*9", b"xyz", false)]
#[case(b"*9", b"ab\08", false)]
fn test_equivalence_without_variants(#[case] pattern: &[u8], #[case] subject: &[u8], #[case] expected: bool) {
    assert_eq!(matches_ascii_with(AnyDigit, pattern, subject), expected);
    assert_eq!(matches_with(AnyDigit, pattern, subject), expected);
}
