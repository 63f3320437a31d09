//! Analyzer configuration.
//!
//! Deployments extend the built-in pattern and alias tables without code
//! changes: extra entries are appended after the built-ins, so the built-in
//! first-match order is preserved. The default configuration reproduces the
//! built-in behavior exactly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

// ============================================================================
// DocumentAlias
// ============================================================================

/// A configured document alias: keyword plus the canonical base name it
/// resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAlias {
    /// The alias keyword users type (matched as a whole word,
    /// case-insensitive).
    pub keyword: String,

    /// The canonical document base name in the vector index.
    pub base_name: String,
}

// ============================================================================
// AnalysisConfig
// ============================================================================

/// Configuration for a [`crate::QueryAnalyzer`].
///
/// All fields default to empty; `AnalysisConfig::default()` yields an
/// analyzer identical to [`crate::QueryAnalyzer::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Document aliases appended after the built-in table.
    #[serde(default)]
    pub extra_document_aliases: Vec<DocumentAlias>,

    /// Definition pattern sources appended after the built-in table.
    #[serde(default)]
    pub extra_definition_patterns: Vec<String>,

    /// Table pattern sources appended after the built-in table.
    #[serde(default)]
    pub extra_table_patterns: Vec<String>,
}

impl AnalysisConfig {
    /// Load a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|err| AnalysisError::config_io(path, err.to_string()))?;

        serde_yaml::from_str(&contents)
            .map_err(|err| AnalysisError::config_parse(path, err.to_string()))
    }

    /// Check whether the configuration adds anything to the built-ins.
    pub fn is_empty(&self) -> bool {
        self.extra_document_aliases.is_empty()
            && self.extra_definition_patterns.is_empty()
            && self.extra_table_patterns.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
