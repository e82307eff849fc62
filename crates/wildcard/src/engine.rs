use crate::case::{Equivalence, Exact};
use crate::utf8;

const STAR: u8 = b'*';
const ANY: u8 = b'?';

/// Tests whether `subject` matches the wildcard `pattern`.
///
/// Both buffers end at their first zero unit or at the end of the slice.
/// `*` matches any run of zero or more characters and `?` matches exactly
/// one character, where a character is one to four UTF-8 units.
///
/// ```
/// use wildcard::matches;
///
/// assert!(matches(b"*issip*ss*", b"mississipissippi"));
/// assert!(matches("𓋍𓋔?".as_bytes(), "𓋍𓋔𓎍".as_bytes()));
/// assert!(!matches(b"ab*d", b"abc"));
/// ```
#[inline]
pub fn matches(pattern: &[u8], subject: &[u8]) -> bool {
    matches_with(Exact, pattern, subject)
}

/// Same as [`matches`] with a custom character equivalence.
#[inline]
pub fn matches_with<E: Equivalence>(eq: E, pattern: &[u8], subject: &[u8]) -> bool {
    run(eq, Cursor::new(pattern), Cursor::new(subject))
}

/// Tests whether `subject` matches `pattern`, looking at no more than
/// `pattern_len` characters of the pattern and `subject_len` characters of the subject.
///
/// Lengths are counted in characters, not units. A buffer still ends early
/// at a zero unit.
///
/// ```
/// use wildcard::matches_bounded;
///
/// assert!(matches_bounded(b"ab*", b"abcdef", 3, 3));
/// assert!(matches_bounded(b"abc", b"abcdef", 3, 3));
/// assert!(!matches_bounded(b"abc", b"abcdef", 3, 4));
/// ```
#[inline]
pub fn matches_bounded(pattern: &[u8], subject: &[u8], pattern_len: usize, subject_len: usize) -> bool {
    matches_bounded_with(Exact, pattern, subject, pattern_len, subject_len)
}

/// Same as [`matches_bounded`] with a custom character equivalence.
#[inline]
pub fn matches_bounded_with<E: Equivalence>(
    eq: E,
    pattern: &[u8],
    subject: &[u8],
    pattern_len: usize,
    subject_len: usize,
) -> bool {
    run(
        eq,
        Cursor::bounded(pattern, pattern_len),
        Cursor::bounded(subject, subject_len),
    )
}

// ---

/// Position within a buffer together with the number of characters that
/// may still be consumed from it.
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    left: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    fn new(buf: &'a [u8]) -> Self {
        Self::bounded(buf, usize::MAX)
    }

    #[inline]
    fn bounded(buf: &'a [u8], left: usize) -> Self {
        Self { buf, pos: 0, left }
    }

    #[inline]
    fn is_end(&self) -> bool {
        self.left == 0 || utf8::is_end(self.buf, self.pos)
    }

    /// Returns `true` if the current character is the single-unit character `unit`.
    #[inline]
    fn is(&self, unit: u8) -> bool {
        !self.is_end() && self.buf[self.pos] == unit
    }

    /// Units of the current character, empty at the end.
    #[inline]
    fn head(&self) -> &'a [u8] {
        if self.left == 0 {
            return &[];
        }
        &self.buf[self.pos..self.pos + utf8::char_len(self.buf, self.pos)]
    }

    /// Moves past the current character, returns `false` if the end is reached.
    #[inline]
    fn advance(&mut self) -> bool {
        if self.is_end() {
            return false;
        }
        (self.pos, _) = utf8::advance(self.buf, self.pos);
        self.left -= 1;
        !self.is_end()
    }

    #[inline]
    fn same<E: Equivalence>(&self, eq: E, other: &Cursor<'_>) -> bool {
        utf8::same_char(eq, self.head(), other.head())
    }

    /// Moves past the current character, then compares the new one with `other`.
    #[inline]
    fn advance_and_same<E: Equivalence>(&mut self, eq: E, other: &Cursor<'_>) -> bool {
        self.advance();
        other.same(eq, self)
    }

    /// Moves past any `*` characters, returns `true` if nothing else is left.
    #[inline]
    fn skip_stars(&mut self) -> bool {
        while self.is(STAR) {
            self.advance();
        }
        self.is_end()
    }
}

/// Outcome of resolving a `*` in the pattern.
enum Star {
    /// The match is decided without looking further.
    Done(bool),
    /// Both cursors stand at the next candidate for synchronization.
    Resume,
}

/// Consumes a run of `*` in `wild` and moves `tame` to the first character
/// that could match what follows the run.
#[inline]
fn resolve<E: Equivalence>(eq: E, wild: &mut Cursor, tame: &mut Cursor) -> Star {
    if wild.skip_stars() {
        return Star::Done(true);
    }
    if tame.is_end() {
        return Star::Done(false);
    }
    if !wild.is(ANY) {
        while !wild.same(eq, tame) {
            if !tame.advance() {
                return Star::Done(false);
            }
        }
    }
    Star::Resume
}

fn run<E: Equivalence>(eq: E, mut wild: Cursor, mut tame: Cursor) -> bool {
    // Up to the first `*` there is nothing to fall back to.
    loop {
        if tame.is_end() {
            return wild.skip_stars();
        }
        if wild.is(STAR) {
            break;
        }
        if !wild.is(ANY) && !wild.same(eq, &tame) {
            return false;
        }
        wild.advance();
        tame.advance();
    }

    if let Star::Done(result) = resolve(eq, &mut wild, &mut tame) {
        return result;
    }

    // The single fallback point: where the pattern after the latest `*`
    // was last anchored in the subject.
    let mut checkpoint = (wild, tame);

    loop {
        if wild.is(STAR) {
            if let Star::Done(result) = resolve(eq, &mut wild, &mut tame) {
                return result;
            }
            checkpoint = (wild, tame);
        } else if !wild.is(ANY) && !wild.same(eq, &tame) {
            if tame.is_end() {
                return false;
            }

            let (anchor, resume) = &mut checkpoint;

            // `?` right after the `*` takes one character whatever it is,
            // so it never needs to be retried.
            while anchor.is(ANY) {
                anchor.advance();
                resume.advance();
            }

            wild = *anchor;
            while !resume.advance_and_same(eq, &wild) {
                if resume.is_end() {
                    return false;
                }
            }
            tame = *resume;
        }

        if tame.is_end() {
            return wild.is_end();
        }

        wild.advance();
        tame.advance();
    }
}
