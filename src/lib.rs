//! Configurable wildcard matching on top of the [`wildcard`] engine.
//!
//! [`Settings`] choose the encoding and case sensitivity, a [`Matcher`]
//! applies them, and [`Timings`] optionally accounts the time spent in
//! matching calls made through it.

// public modules
pub mod error;
pub mod matcher;
pub mod settings;
pub mod timing;

// public uses
pub use error::{Error, Result};
pub use matcher::Matcher;
pub use settings::{CaseSensitivity, Encoding, Settings, Source, SourceFile};
pub use timing::{Timings, Variant};

// re-exports
pub use wildcard;
