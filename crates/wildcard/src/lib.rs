//! Glob-style wildcard matching over UTF-8 encoded text.
//!
//! `*` matches any run of zero or more characters and `?` matches exactly one
//! character. A character is one to four UTF-8 units, and a wildcard is only
//! recognized when it stands as a whole single-unit character.
//!
//! Buffers end at the first zero unit or at the end of the slice, so both
//! Rust strings and NUL-terminated byte buffers can be matched directly.
//! Matching never allocates and keeps a single retry point, so it runs in
//! time proportional to the product of the input lengths at worst.
//!
//! ```
//! use wildcard::{matches, matches_ascii, matches_bounded, utf8::char_count};
//!
//! let (pattern, subject) = ("Мне * язык".as_bytes(), "Мне нужен язык".as_bytes());
//! assert!(matches(pattern, subject));
//! assert!(matches_bounded(pattern, subject, char_count(pattern), char_count(subject)));
//! assert!(matches_ascii(b"a*zz*", b"aaazz"));
//! ```

mod ascii;
mod case;
mod engine;
mod pattern;
pub mod utf8;

pub use ascii::{matches_ascii, matches_ascii_with};
pub use case::{Case, Equivalence, Exact, IgnoreAsciiCase};
pub use engine::{matches, matches_bounded, matches_bounded_with, matches_with};
pub use pattern::Pattern;
pub use utf8::char_count;
