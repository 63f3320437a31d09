//! Common types for query analysis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// AbbreviationIndex
// ============================================================================

/// Mapping from a short form (e.g. "MaLo") to its full term
/// (e.g. "Marktlokation"), supplied by an external glossary collaborator.
///
/// An ordered map is used so that expansion output is deterministic when
/// several abbreviations apply to the same query.
pub type AbbreviationIndex = BTreeMap<String, String>;

// ============================================================================
// IntentType
// ============================================================================

/// The classified intent of a user query.
///
/// Exactly one intent is assigned per query; [`IntentType::General`] is the
/// fallback when no heuristic matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentType {
    /// The user asks what a term or abbreviation means.
    Definition,
    /// The user asks for tabular data (deadlines, code lists, overviews).
    TableData,
    /// The user references a specific regulatory document (e.g. "GPKE").
    DocumentSpecific,
    /// No specific heuristic matched.
    #[default]
    General,
}

impl IntentType {
    /// Get the intent name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentType::Definition => "definition",
            IntentType::TableData => "table_data",
            IntentType::DocumentSpecific => "document_specific",
            IntentType::General => "general",
        }
    }
}

impl std::fmt::Display for IntentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ChunkType
// ============================================================================

/// Label on a unit of indexed document content, used to narrow vector search.
///
/// The string labels are shared with the indexing pipeline and stored in the
/// `chunk_type` payload field of every indexed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkType {
    /// A glossary-style definition of a domain term.
    Definition,
    /// An abbreviation entry with its expansion.
    Abbreviation,
    /// A table extracted with structure preserved (deadlines, code lists).
    StructuredTable,
    /// A regular prose paragraph.
    Paragraph,
    /// A full-document fallback chunk.
    FullText,
}

impl ChunkType {
    /// Get the payload label for this chunk type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkType::Definition => "definition",
            ChunkType::Abbreviation => "abbreviation",
            ChunkType::StructuredTable => "structured_table",
            ChunkType::Paragraph => "paragraph",
            ChunkType::FullText => "full_text",
        }
    }

    /// Parse a payload label into a chunk type.
    ///
    /// Returns `None` for unknown labels; callers decide how to group those.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "definition" => Some(ChunkType::Definition),
            "abbreviation" => Some(ChunkType::Abbreviation),
            "structured_table" => Some(ChunkType::StructuredTable),
            "paragraph" => Some(ChunkType::Paragraph),
            "full_text" => Some(ChunkType::FullText),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TemporalCriteria
// ============================================================================

/// Temporal restriction on which document revisions to search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalCriteria {
    /// When no explicit document reference is present, restrict the search
    /// to the most recent revision of each document family.
    pub require_latest: bool,

    /// Pin the search to a specific revision. Carried for forward
    /// compatibility; the current analysis never populates it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_version: Option<String>,
}

impl Default for TemporalCriteria {
    fn default() -> Self {
        Self {
            require_latest: true,
            specific_version: None,
        }
    }
}

// ============================================================================
// FilterCriteria
// ============================================================================

/// Structured restrictions derived from query analysis.
///
/// All fields are optional; absent fields mean "no restriction". The
/// criteria are turned into a vector-store filter by the search layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Restrict results to these chunk types, in priority order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_types: Option<Vec<ChunkType>>,

    /// Restrict results to one canonical document family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_base_name: Option<String>,

    /// Temporal restriction (latest revisions by default).
    #[serde(default)]
    pub temporal: TemporalCriteria,
}

// ============================================================================
// QueryAnalysis
// ============================================================================

/// The result of analyzing a user query.
///
/// Produced by [`crate::analyze_query`] and consumed by the search layer,
/// which embeds `expanded_query` and applies `filter_criteria` to the
/// vector search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAnalysis {
    /// The classified intent.
    pub intent: IntentType,

    /// The matched alias keyword (e.g. "GPKE"), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_reference: Option<String>,

    /// Structured search restrictions.
    pub filter_criteria: FilterCriteria,

    /// The rewritten query to embed. Never empty: defaults to the original
    /// query when no expansion applies.
    pub expanded_query: String,

    /// Classification confidence in `[0, 1]`.
    pub confidence: f32,
}

impl QueryAnalysis {
    /// Create a fallback analysis for a query: general intent, no
    /// restrictions, the query itself as the expanded query.
    pub fn general(query: &str, confidence: f32) -> Self {
        Self {
            intent: IntentType::General,
            document_reference: None,
            filter_criteria: FilterCriteria::default(),
            expanded_query: query.to_string(),
            confidence,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_type_as_str() {
        assert_eq!(IntentType::Definition.as_str(), "definition");
        assert_eq!(IntentType::TableData.as_str(), "table_data");
        assert_eq!(IntentType::DocumentSpecific.as_str(), "document_specific");
        assert_eq!(IntentType::General.as_str(), "general");
        assert_eq!(IntentType::default(), IntentType::General);
    }

    #[test]
    fn test_chunk_type_label_roundtrip() {
        for chunk_type in [
            ChunkType::Definition,
            ChunkType::Abbreviation,
            ChunkType::StructuredTable,
            ChunkType::Paragraph,
            ChunkType::FullText,
        ] {
            assert_eq!(ChunkType::from_label(chunk_type.as_str()), Some(chunk_type));
        }
        assert_eq!(ChunkType::from_label("pseudocode"), None);
    }

    #[test]
    fn test_temporal_criteria_default() {
        let temporal = TemporalCriteria::default();
        assert!(temporal.require_latest);
        assert!(temporal.specific_version.is_none());
    }

    #[test]
    fn test_query_analysis_serialization() {
        let analysis = QueryAnalysis {
            intent: IntentType::TableData,
            document_reference: Some("GPKE".to_string()),
            filter_criteria: FilterCriteria {
                chunk_types: Some(vec![ChunkType::StructuredTable]),
                document_base_name: Some("BK6-24-174_GPKE_Teil1_Lesefassung".to_string()),
                temporal: TemporalCriteria::default(),
            },
            expanded_query: "Tabellarische Daten und Listen: Fristen der GPKE".to_string(),
            confidence: 0.95,
        };

        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"intent\":\"table_data\""));
        assert!(json.contains("\"documentReference\":\"GPKE\""));
        assert!(json.contains("\"chunkTypes\":[\"structured_table\"]"));
        assert!(json.contains("\"requireLatest\":true"));
        assert!(!json.contains("specificVersion"));
    }

    #[test]
    fn test_query_analysis_general() {
        let analysis = QueryAnalysis::general("Wie geht das?", 0.7);
        assert_eq!(analysis.intent, IntentType::General);
        assert!(analysis.document_reference.is_none());
        assert!(analysis.filter_criteria.chunk_types.is_none());
        assert_eq!(analysis.expanded_query, "Wie geht das?");
        assert_eq!(analysis.confidence, 0.7);
    }
}
