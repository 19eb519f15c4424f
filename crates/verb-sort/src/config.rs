//! Optional TOML configuration for the sorter
//!
//! ```toml
//! default_input = "src/assets/verbs.json"
//! indent = 2
//! ```

use crate::sorter::{DEFAULT_INDENT, SortOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Source used when neither the command line nor the config names one
pub const DEFAULT_INPUT: &str = "src/assets/verbs.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", .path.display())]
    TomlDeserialize {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    /// Verb file sorted when no path is given
    pub default_input: PathBuf,
    /// Spaces per nesting level in the output
    pub indent: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            default_input: PathBuf::from(DEFAULT_INPUT),
            indent: DEFAULT_INDENT,
        }
    }
}

impl SortConfig {
    /// Load configuration from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::TomlDeserialize {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `path` if given, otherwise use built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            indent: self.indent,
        }
    }
}
