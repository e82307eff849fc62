// third-party imports
use wildcard::{Case, matches_ascii_with, matches_bounded_with, matches_with};

// local imports
use crate::settings::{Encoding, Settings};
use crate::timing::{Timings, Variant};

// ---

/// Matches wildcard patterns with the encoding and case sensitivity chosen by [`Settings`].
///
/// # Examples
///
/// ```
/// use fastwild::{CaseSensitivity, Matcher, Settings};
///
/// let matcher = Matcher::new(&Settings {
///     case: CaseSensitivity::Insensitive,
///     ..Default::default()
/// });
/// assert!(matcher.matches("*SIP*", "mississippi"));
/// // only ASCII letters are folded
/// assert!(!matcher.matches("Ä*", "ärger"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Matcher {
    encoding: Encoding,
    case: Case,
}

impl Matcher {
    pub fn new(settings: &Settings) -> Self {
        log::debug!(
            "creating matcher: encoding={} case={}",
            settings.encoding.as_ref(),
            settings.case.as_ref()
        );

        Self {
            encoding: settings.encoding,
            case: settings.case.into(),
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn case(&self) -> Case {
        self.case
    }

    /// The engine entry point used by [`Matcher::matches`], as accounted by [`Matcher::matches_timed`].
    pub fn variant(&self) -> Variant {
        match self.encoding {
            Encoding::Utf8 => Variant::Utf8,
            Encoding::Ascii => Variant::Ascii,
        }
    }

    /// Tests whether `subject` matches `pattern`.
    ///
    /// Both buffers end at their first zero unit or at the end of the slice.
    #[inline]
    pub fn matches(&self, pattern: impl AsRef<[u8]>, subject: impl AsRef<[u8]>) -> bool {
        let (pattern, subject) = (pattern.as_ref(), subject.as_ref());
        match self.encoding {
            Encoding::Utf8 => matches_with(self.case, pattern, subject),
            Encoding::Ascii => matches_ascii_with(self.case, pattern, subject),
        }
    }

    /// Tests whether the first `subject_len` characters of `subject` match the
    /// first `pattern_len` characters of `pattern`.
    #[inline]
    pub fn matches_bounded(
        &self,
        pattern: impl AsRef<[u8]>,
        subject: impl AsRef<[u8]>,
        pattern_len: usize,
        subject_len: usize,
    ) -> bool {
        let (pattern, subject) = (pattern.as_ref(), subject.as_ref());
        match self.encoding {
            Encoding::Utf8 => matches_bounded_with(self.case, pattern, subject, pattern_len, subject_len),
            Encoding::Ascii => matches_ascii_with(
                self.case,
                &pattern[..pattern_len.min(pattern.len())],
                &subject[..subject_len.min(subject.len())],
            ),
        }
    }
}

impl Matcher {
    /// Same as [`Matcher::matches`], accounting the call to [`Matcher::variant`] in `timings`.
    #[inline]
    pub fn matches_timed(&self, timings: &Timings, pattern: impl AsRef<[u8]>, subject: impl AsRef<[u8]>) -> bool {
        timings.measure(self.variant(), || self.matches(pattern, subject))
    }

    /// Same as [`Matcher::matches_bounded`], accounting the call in `timings`.
    #[inline]
    pub fn matches_bounded_timed(
        &self,
        timings: &Timings,
        pattern: impl AsRef<[u8]>,
        subject: impl AsRef<[u8]>,
        pattern_len: usize,
        subject_len: usize,
    ) -> bool {
        let variant = match self.encoding {
            Encoding::Utf8 => Variant::Utf8Bounded,
            Encoding::Ascii => Variant::Ascii,
        };
        timings.measure(variant, || self.matches_bounded(pattern, subject, pattern_len, subject_len))
    }
}

impl From<&Settings> for Matcher {
    fn from(settings: &Settings) -> Self {
        Self::new(settings)
    }
}
