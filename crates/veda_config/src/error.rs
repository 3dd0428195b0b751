//! Error type for configuration loading.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use veda_search::SearchError;

/// Failures while reading or resolving a configuration file.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, message: String },
    /// The file is not valid TOML, or a key has the wrong type.
    Parse(String),
    /// A value parsed but is not acceptable.
    InvalidValue { field: &'static str, value: String },
    /// The `[search]` section violates a search invariant.
    Search(SearchError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "cannot read config {}: {message}", path.display())
            }
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid config value for {field}: {value}")
            }
            Self::Search(e) => write!(f, "config [search]: {e}"),
        }
    }
}

impl Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<SearchError> for ConfigError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
