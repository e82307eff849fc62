//! Character primitives over UTF-8 encoded buffers.
//!
//! A buffer ends at its first zero unit or at the end of the slice, whichever
//! comes first. The width of a character is taken from its leading unit alone;
//! continuation units are never validated, but a zero unit always ends the
//! character early, so no primitive here can step over the terminator.

use crate::case::Equivalence;

// Upper bounds of leading unit values for each character width.
const CONTINUATION_MAX: u8 = 0xBF; // 10xxxxxx
const TWO_UNIT_MAX: u8 = 0xDF; // 110xxxxx
const THREE_UNIT_MAX: u8 = 0xEF; // 1110xxxx

/// Returns the number of units a character claims to occupy, judging by its leading unit.
///
/// ```
/// use wildcard::utf8::char_width;
///
/// assert_eq!(char_width(b'a'), 1);
/// assert_eq!(char_width("ä".as_bytes()[0]), 2);
/// assert_eq!(char_width("世".as_bytes()[0]), 3);
/// assert_eq!(char_width("🦀".as_bytes()[0]), 4);
/// ```
#[inline]
pub const fn char_width(lead: u8) -> usize {
    1 + (lead > CONTINUATION_MAX) as usize + (lead > TWO_UNIT_MAX) as usize + (lead > THREE_UNIT_MAX) as usize
}

/// Returns `true` if `pos` is at the terminator of `buf`.
#[inline]
pub fn is_end(buf: &[u8], pos: usize) -> bool {
    matches!(buf.get(pos), None | Some(0))
}

/// Returns the number of units the character at `pos` actually occupies.
///
/// This is the claimed width cut short at the first zero unit or at the end
/// of the slice. At the terminator it is zero.
#[inline]
pub fn char_len(buf: &[u8], pos: usize) -> usize {
    match buf.get(pos) {
        None | Some(0) => 0,
        Some(&lead) => {
            1 + buf[pos + 1..]
                .iter()
                .take(char_width(lead) - 1)
                .take_while(|&&unit| unit != 0)
                .count()
        }
    }
}

/// Moves `pos` past one character.
///
/// Returns the new position and whether there is another character there.
/// At the terminator the position does not change.
#[inline]
pub fn advance(buf: &[u8], pos: usize) -> (usize, bool) {
    let pos = pos + char_len(buf, pos);
    (pos, !is_end(buf, pos))
}

/// Compares the characters starting at `a` and `b` under the given equivalence.
///
/// Two terminators compare equal, a terminator never equals a character.
#[inline]
pub fn same_char<E: Equivalence>(eq: E, a: &[u8], b: &[u8]) -> bool {
    let a = &a[..char_len(a, 0)];
    let b = &b[..char_len(b, 0)];
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| eq.same(x, y))
}

/// Advances `pos` in `b` past one character, then compares the character at
/// the start of `a` with the one now at `pos`.
///
/// Returns the new position and the comparison result.
#[inline]
pub fn advance_and_same<E: Equivalence>(eq: E, a: &[u8], b: &[u8], pos: usize) -> (usize, bool) {
    let (pos, _) = advance(b, pos);
    (pos, same_char(eq, a, &b[pos..]))
}

/// Returns the number of characters before the terminator.
///
/// ```
/// use wildcard::utf8::char_count;
///
/// assert_eq!(char_count(b""), 0);
/// assert_eq!(char_count("a🦀c".as_bytes()), 3);
/// assert_eq!(char_count(b"ab\0cd"), 2);
/// ```
pub fn char_count(buf: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while !is_end(buf, pos) {
        pos += char_len(buf, pos);
        count += 1;
    }
    count
}
