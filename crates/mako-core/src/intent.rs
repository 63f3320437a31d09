//! Intent classification for user queries.
//!
//! Queries are matched against two ordered pattern tables: definition
//! phrasings first, table phrasings second. The first table with a hit
//! decides the intent; everything else falls back to
//! [`IntentType::General`].
//!
//! The pattern lists are German-language seed lists. Deployments can extend
//! them via [`crate::config::AnalysisConfig`] without changing the
//! classification algorithm.

use regex::Regex;

use crate::constants::{CONFIDENCE_DEFINITION, CONFIDENCE_GENERAL, CONFIDENCE_TABLE_DATA};
use crate::types::{ChunkType, IntentType};

// ============================================================================
// Pattern Tables
// ============================================================================

/// Phrasings that signal a definition question.
///
/// Matched case-insensitively against the normalized (lower-cased, trimmed)
/// query. Evaluated before [`TABLE_PATTERNS`]; a hit here wins.
pub const DEFINITION_PATTERNS: &[&str] = &[
    r"was ist",
    r"was sind",
    r"was bedeutet",
    r"was heißt",
    r"definiere",
    r"definition von",
    r"bedeutung von",
    r"abkürzung",
    r"steht .+ für",
    r"wofür steht",
    r"erkläre den begriff",
];

/// Phrasings that signal a request for tabular data (deadlines, code
/// lists, overviews).
pub const TABLE_PATTERNS: &[&str] = &[
    r"liste der",
    r"liste von",
    r"liste aller",
    r"tabelle mit",
    r"tabelle der",
    r"übersicht über",
    r"übersicht der",
    r"aufstellung",
    r"welche fristen",
    r"alle codes",
];

/// Compile a pattern table, skipping any source that fails to parse.
///
/// The built-in tables are guarded by tests below; user-supplied patterns
/// are validated separately with a proper error.
pub(crate) fn compile_patterns(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .filter_map(|source| Regex::new(source).ok())
        .collect()
}

// ============================================================================
// Classification
// ============================================================================

/// The outcome of intent classification: an intent, its base confidence,
/// and the chunk-type restriction it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentMatch {
    /// The classified intent.
    pub intent: IntentType,
    /// Base confidence for this intent.
    pub confidence: f32,
    /// Chunk types to restrict the search to, if the intent implies any.
    pub chunk_types: Option<Vec<ChunkType>>,
}

/// Classify a normalized (lower-cased, trimmed) query.
///
/// Definition patterns take priority over table patterns; the evaluation
/// order is fixed.
pub fn classify(normalized_query: &str, definition: &[Regex], table: &[Regex]) -> IntentMatch {
    if definition.iter().any(|re| re.is_match(normalized_query)) {
        return IntentMatch {
            intent: IntentType::Definition,
            confidence: CONFIDENCE_DEFINITION,
            chunk_types: Some(vec![ChunkType::Definition, ChunkType::Abbreviation]),
        };
    }

    if table.iter().any(|re| re.is_match(normalized_query)) {
        return IntentMatch {
            intent: IntentType::TableData,
            confidence: CONFIDENCE_TABLE_DATA,
            chunk_types: Some(vec![ChunkType::StructuredTable]),
        };
    }

    IntentMatch {
        intent: IntentType::General,
        confidence: CONFIDENCE_GENERAL,
        chunk_types: None,
    }
}

// ============================================================================
// Tests
// ============================================================================
