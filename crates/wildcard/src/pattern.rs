use std::fmt;
use std::str::FromStr;

use crate::case::Case;
use crate::engine::{matches_bounded_with, matches_with};
use crate::utf8::char_count;

/// A wildcard pattern for matching text strings.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one UTF-8 character
///
/// There is no escape syntax, every other character matches itself.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log");
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
///
/// - Patterns can be displayed back to strings via the `Display` trait
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    raw: String,
    len: usize,
    case: Case,
}

impl Pattern {
    /// Creates a new case-sensitive pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    /// A NUL character ends the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("hello*");
    /// assert!(pattern.matches("hello world"));
    /// assert_eq!(pattern.char_count(), 6);
    /// ```
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let len = char_count(raw.as_bytes());
        Self {
            raw,
            len,
            case: Case::Sensitive,
        }
    }

    /// Returns the same pattern using the given case sensitivity.
    ///
    /// ```
    /// use wildcard::{Case, Pattern};
    ///
    /// let pattern = Pattern::new("*.TXT").with_case(Case::Insensitive);
    /// assert!(pattern.matches("readme.txt"));
    /// ```
    pub fn with_case(self, case: Case) -> Self {
        Self { case, ..self }
    }

    pub fn case(&self) -> Case {
        self.case
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of characters in the pattern, computed once at construction.
    pub fn char_count(&self) -> usize {
        self.len
    }

    #[inline]
    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs");
    /// assert!(pattern.matches("main.rs"));
    /// assert!(pattern.matches("lib.rs"));
    /// assert!(!pattern.matches("main.txt"));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("??");
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    ///
    /// // Retrying after a partial match
    /// let pattern = Pattern::new("*test*");
    /// assert!(pattern.matches("this is a test case"));
    /// assert!(pattern.matches("test"));
    /// assert!(!pattern.matches("no match here"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        matches_with(self.case, self.raw.as_bytes(), text.as_bytes())
    }

    #[inline]
    /// Tests whether the pattern matches the first `text_len` characters of the given text.
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("ä?");
    /// assert!(pattern.matches_bounded("äöü", 2));
    /// assert!(!pattern.matches_bounded("äöü", 3));
    /// ```
    pub fn matches_bounded(&self, text: &str, text_len: usize) -> bool {
        matches_bounded_with(self.case, self.raw.as_bytes(), text.as_bytes(), self.len, text_len)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Pattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl FromStr for Pattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
