use memchr::memchr3;

use crate::case::{Equivalence, Exact};

const STAR: u8 = b'*';
const ANY: u8 = b'?';

/// Tests whether `subject` matches the wildcard `pattern`, treating every unit
/// as a separate character.
///
/// This is the fast path for text known to be single-unit per character.
/// On such text it agrees with [`matches`](crate::matches).
///
/// ```
/// use wildcard::matches_ascii;
///
/// assert!(matches_ascii(b"*ccd", b"abcccd"));
/// assert!(matches_ascii(b"?*?", b"ab"));
/// assert!(!matches_ascii(b"??", b"a"));
/// ```
#[inline]
pub fn matches_ascii(pattern: &[u8], subject: &[u8]) -> bool {
    matches_ascii_with(Exact, pattern, subject)
}

/// Same as [`matches_ascii`] with a custom unit equivalence.
pub fn matches_ascii_with<E: Equivalence>(eq: E, pattern: &[u8], subject: &[u8]) -> bool {
    let mut wild = Units::new(pattern);
    let mut tame = Units::new(subject);

    loop {
        if tame.is_end() {
            return wild.skip_stars();
        }
        if wild.unit() == STAR {
            break;
        }
        if wild.unit() != ANY && !eq.same(wild.unit(), tame.unit()) {
            return false;
        }
        wild.advance();
        tame.advance();
    }

    if let Some(result) = resolve(eq, &mut wild, &mut tame) {
        return result;
    }

    let (mut anchor, mut resume) = (wild, tame);

    loop {
        if wild.unit() == STAR {
            if let Some(result) = resolve(eq, &mut wild, &mut tame) {
                return result;
            }
            (anchor, resume) = (wild, tame);
        } else if wild.unit() != ANY && !eq.same(wild.unit(), tame.unit()) {
            if tame.is_end() {
                return false;
            }

            while anchor.unit() == ANY {
                anchor.advance();
                resume.advance();
            }

            wild = anchor;
            loop {
                resume.advance();
                if eq.same(wild.unit(), resume.unit()) {
                    break;
                }
                if resume.is_end() {
                    return false;
                }
            }
            tame = resume;
        }

        if tame.is_end() {
            return wild.is_end();
        }

        wild.advance();
        tame.advance();
    }
}

// ---

#[derive(Debug, Clone, Copy)]
struct Units<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Units<'a> {
    #[inline]
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current unit, zero at the end.
    #[inline]
    fn unit(&self) -> u8 {
        self.buf.get(self.pos).copied().unwrap_or(0)
    }

    #[inline]
    fn is_end(&self) -> bool {
        self.unit() == 0
    }

    #[inline]
    fn advance(&mut self) {
        if !self.is_end() {
            self.pos += 1;
        }
    }

    #[inline]
    fn skip_stars(&mut self) -> bool {
        while self.unit() == STAR {
            self.pos += 1;
        }
        self.is_end()
    }

    /// Moves to the next unit equivalent to `unit`, returns `false` if the end comes first.
    #[inline]
    fn seek<E: Equivalence>(&mut self, eq: E, unit: u8) -> bool {
        let rest = &self.buf[self.pos..];
        let found = match eq.variants(unit) {
            Some([a, b]) => memchr3(a, b, 0, rest),
            None => rest.iter().position(|&u| u == 0 || eq.same(u, unit)),
        };
        match found {
            Some(offset) => {
                self.pos += offset;
                !self.is_end()
            }
            None => {
                self.pos = self.buf.len();
                false
            }
        }
    }
}

/// Consumes a run of `*` and seeks the subject to the next candidate.
///
/// Returns `Some` when the outcome is already decided.
#[inline]
fn resolve<E: Equivalence>(eq: E, wild: &mut Units, tame: &mut Units) -> Option<bool> {
    if wild.skip_stars() {
        return Some(true);
    }
    if tame.is_end() {
        return Some(false);
    }
    if wild.unit() != ANY && !tame.seek(eq, wild.unit()) {
        return Some(false);
    }
    None
}

#[cfg(test)]
mod tests;
