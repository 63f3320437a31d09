//! Error types for mako-core.
//!
//! Analysis itself never fails: every query produces a well-defined result.
//! Errors only arise from user-supplied configuration (files, patterns,
//! aliases).

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building an analyzer from configuration.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A user-supplied pattern is not a valid regular expression.
    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// Description of the parse failure.
        message: String,
    },

    /// A user-supplied document alias could not be compiled.
    #[error("Invalid document alias `{keyword}`: {message}")]
    InvalidAlias {
        /// The offending alias keyword.
        keyword: String,
        /// Description of the failure.
        message: String,
    },

    /// Failed to read a configuration file.
    #[error("Config I/O error at `{path}`: {message}")]
    ConfigIo {
        /// Path to the configuration file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// Failed to parse a configuration file.
    #[error("Config parse error at `{path}`: {message}")]
    ConfigParse {
        /// Path to the configuration file.
        path: PathBuf,
        /// Description of the parse error.
        message: String,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A wrapped generic error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnalysisError {
    /// Create an invalid-pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-alias error.
    pub fn invalid_alias(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAlias {
            keyword: keyword.into(),
            message: message.into(),
        }
    }

    /// Create a config I/O error.
    pub fn config_io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigIo {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }
}
