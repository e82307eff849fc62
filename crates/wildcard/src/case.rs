/// Decides whether two storage units are considered equal when matching.
///
/// The matching engines never compare wildcard units through an equivalence,
/// so `*` and `?` keep their meaning regardless of the chosen folding.
pub trait Equivalence: Copy {
    /// Maps a unit to the value it is compared by.
    fn fold(self, unit: u8) -> u8;

    /// Returns every unit that folds to the same value as `unit`, if there
    /// are no more than two of them.
    ///
    /// Used to seek the next candidate unit with a vectorized scan. `None`
    /// makes the seek compare unit by unit with [`Equivalence::same`].
    fn variants(self, _unit: u8) -> Option<[u8; 2]> {
        None
    }

    #[inline]
    fn same(self, a: u8, b: u8) -> bool {
        self.fold(a) == self.fold(b)
    }
}

/// Exact-value comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exact;

impl Equivalence for Exact {
    #[inline]
    fn fold(self, unit: u8) -> u8 {
        unit
    }

    #[inline]
    fn variants(self, unit: u8) -> Option<[u8; 2]> {
        Some([unit, unit])
    }

    #[inline]
    fn same(self, a: u8, b: u8) -> bool {
        a == b
    }
}

/// Comparison that ignores the case of ASCII letters.
///
/// Units at or above `0x80` are compared exactly, so characters occupying
/// more than one unit still match only themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IgnoreAsciiCase;

impl Equivalence for IgnoreAsciiCase {
    #[inline]
    fn fold(self, unit: u8) -> u8 {
        unit.to_ascii_lowercase()
    }

    #[inline]
    fn variants(self, unit: u8) -> Option<[u8; 2]> {
        Some([unit.to_ascii_lowercase(), unit.to_ascii_uppercase()])
    }
}

/// Equivalence selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    #[default]
    Sensitive,
    Insensitive,
}

impl Equivalence for Case {
    #[inline]
    fn fold(self, unit: u8) -> u8 {
        match self {
            Self::Sensitive => Exact.fold(unit),
            Self::Insensitive => IgnoreAsciiCase.fold(unit),
        }
    }

    #[inline]
    fn variants(self, unit: u8) -> Option<[u8; 2]> {
        match self {
            Self::Sensitive => Exact.variants(unit),
            Self::Insensitive => IgnoreAsciiCase.variants(unit),
        }
    }
}

#[cfg(test)]
mod tests;
