// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur while configuring matching.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    UnknownEncoding(#[from] UnknownEncodingError),
    #[error(transparent)]
    UnknownCaseSensitivity(#[from] UnknownCaseSensitivityError),
}

/// UnknownEncodingError is an error which may occur when parsing encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown encoding {value:?}, use any of {valid_values:?}")]
pub struct UnknownEncodingError {
    pub value: String,
    pub valid_values: Vec<String>,
}

/// UnknownCaseSensitivityError is an error which may occur when parsing case sensitivity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown case sensitivity {value:?}, use any of {valid_values:?}")]
pub struct UnknownCaseSensitivityError {
    pub value: String,
    pub valid_values: Vec<String>,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
