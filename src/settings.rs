// std imports
use std::ffi::OsString;
use std::include_str;
use std::path::PathBuf;
use std::str::FromStr;

// third-party imports
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

// local imports
use crate::error::{Result, UnknownCaseSensitivityError, UnknownEncodingError};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

/// Environment variable holding the path of a settings file.
pub const CONFIG_ENV_VAR: &str = "FASTWILD_CONFIG";

// ---

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub encoding: Encoding,
    pub case: CaseSensitivity,
}

impl Settings {
    /// Loads settings from the embedded defaults overridden by the given sources, in order.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        for source in sources {
            builder = match source {
                Source::File(file) => {
                    log::debug!("loading settings from {:?}", file.filename);
                    builder.add_source(File::from(file.filename).required(file.required))
                }
                Source::Str(text, format) => {
                    log::debug!("loading settings from {:?} string of {} bytes", format, text.len());
                    builder.add_source(File::from_str(&text, format))
                }
            };
        }

        let settings: Self = builder.build()?.try_deserialize()?;
        log::debug!(
            "loaded settings: encoding={} case={}",
            settings.encoding.as_ref(),
            settings.case.as_ref()
        );

        Ok(settings)
    }

    /// Loads settings from the embedded defaults and the file named by
    /// [`CONFIG_ENV_VAR`], if it is set.
    pub fn load_default() -> Result<Self> {
        Self::load_from(std::env::var_os(CONFIG_ENV_VAR))
    }

    /// Loads settings from the embedded defaults and `filename`, if given.
    ///
    /// A named file is required to exist.
    pub fn load_from(filename: Option<OsString>) -> Result<Self> {
        match filename {
            Some(filename) => Self::load([SourceFile::new(filename).into()]),
            None => Self::load([]),
        }
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(SourceFile),
    Str(String, FileFormat),
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}

// ---

/// Encoding of patterns and subjects.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Default, EnumIter, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Encoding {
    /// One to four units per character.
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    #[strum(serialize = "utf-8")]
    Utf8,
    /// One unit per character.
    Ascii,
}

impl FromStr for Encoding {
    type Err = UnknownEncodingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.replace('-', "");
        Self::iter()
            .find(|v| v.as_ref().replace('-', "").eq_ignore_ascii_case(&key))
            .ok_or_else(|| UnknownEncodingError {
                value: s.into(),
                valid_values: Self::iter().map(|v| v.as_ref().into()).collect(),
            })
    }
}

// ---

/// Case sensitivity of literal characters.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Default, EnumIter, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    /// Folds ASCII letters only.
    Insensitive,
}

impl FromStr for CaseSensitivity {
    type Err = UnknownCaseSensitivityError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::iter()
            .find(|v| v.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCaseSensitivityError {
                value: s.into(),
                valid_values: Self::iter().map(|v| v.as_ref().into()).collect(),
            })
    }
}

impl From<CaseSensitivity> for wildcard::Case {
    fn from(value: CaseSensitivity) -> Self {
        match value {
            CaseSensitivity::Sensitive => Self::Sensitive,
            CaseSensitivity::Insensitive => Self::Insensitive,
        }
    }
}
