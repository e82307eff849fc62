use rstest::rstest;

use super::*;

#[rstest]
#[case(b'a', b'a', true)]
#[case(b'a', b'A', false)]
#[case(0xC3, 0xC3, true)]
#[case(0, 0, true)]
fn test_exact(#[case] a: u8, #[case] b: u8, #[case] expected: bool) {
    assert_eq!(Exact.same(a, b), expected);
    assert_eq!(Case::Sensitive.same(a, b), expected);
}

#[rstest]
#[case(b'a', b'A', true)]
#[case(b'Z', b'z', true)]
#[case(b'a', b'b', false)]
#[case(b'@', b'`', false)]
#[case(0xC3, 0xE3, false)]
fn test_ignore_ascii_case(#[case] a: u8, #[case] b: u8, #[case] expected: bool) {
    assert_eq!(IgnoreAsciiCase.same(a, b), expected);
    assert_eq!(Case::Insensitive.same(a, b), expected);
}

#[test]
fn test_variants() {
    assert_eq!(Exact.variants(b'q'), Some([b'q', b'q']));
    assert_eq!(IgnoreAsciiCase.variants(b'q'), Some([b'q', b'Q']));
    assert_eq!(IgnoreAsciiCase.variants(b'Q'), Some([b'q', b'Q']));
    assert_eq!(IgnoreAsciiCase.variants(b'7'), Some([b'7', b'7']));
    assert_eq!(IgnoreAsciiCase.variants(0x9F), Some([0x9F, 0x9F]));
    assert_eq!(Case::Insensitive.variants(b'z'), Some([b'z', b'Z']));
}

#[derive(Clone, Copy)]
struct Vowels;

impl Equivalence for Vowels {
    fn fold(self, unit: u8) -> u8 {
        if b"aeiou".contains(&unit) { b'a' } else { unit }
    }
}

#[test]
fn test_variants_default_to_none() {
    assert_eq!(Vowels.variants(b'e'), None);
    assert!(Vowels.same(b'e', b'u'));
    assert!(!Vowels.same(b'e', b'x'));
}

#[test]
fn test_default_case_is_sensitive() {
    assert_eq!(Case::default(), Case::Sensitive);
}
