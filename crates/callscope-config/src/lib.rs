//! Shared configuration for the callscope crates.
//!
//! Configuration is read from TOML. Every field is optional and falls back to
//! the values in [`defaults`], so an empty document yields a working setup for
//! the built-in `abc` language:
//!
//! ```toml
//! language_id = "abc"
//! function_keyword = "func"
//! log_filter = "callscope=debug"
//! log_format = "compact"
//! ```

pub mod defaults;
mod logging;

use std::fs;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use logging::{LogFormat, LogFormatParseError};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration from {path}: {source}")]
    Io {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying error wrapped in Arc for Clone support.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The TOML document was malformed or had the wrong shape.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The function keyword cannot introduce a declaration.
    #[error("function keyword '{0}' must be non-empty and contain no whitespace")]
    InvalidKeyword(String),
}

impl ConfigError {
    fn io(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source: Arc::new(source),
        }
    }
}

/// Settings consumed by the syntax index, the service facade and telemetry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Language identifier whose documents are parsed by the built-in index.
    pub language_id: String,
    /// Keyword that opens a function declaration.
    pub function_keyword: String,
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Telemetry output format.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_id: defaults::default_language_id(),
            function_keyword: defaults::default_function_keyword(),
            log_filter: defaults::default_log_filter(),
            log_format: defaults::default_log_format(),
        }
    }
}

impl Config {
    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidKeyword`] when the keyword is unusable.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// behaves like [`Config::from_toml_str`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|error| ConfigError::io(path, error))?;
        Self::from_toml_str(&contents)
    }

    /// Checks invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyword`] when the function keyword is
    /// empty or contains whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let keyword = self.function_keyword.as_str();
        if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidKeyword(keyword.to_owned()));
        }
        Ok(())
    }

    /// Returns the configured log filter.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the configured log format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
