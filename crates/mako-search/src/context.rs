//! Chunk-type-aware context synthesis.
//!
//! Retrieved chunks are rendered into a single German-language context
//! block for the answering model. Chunks are grouped by type under fixed
//! headings, and the group order follows the query intent: definition
//! queries read definitions first, table queries read tables first.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use mako_core::{ChunkType, IntentType};

use crate::payload;

// ============================================================================
// RetrievedChunk
// ============================================================================

/// A chunk returned by the vector search, reduced to what synthesis needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievedChunk {
    /// The chunk's text content.
    pub content: String,

    /// Raw chunk-type label from the payload. Unknown labels are kept and
    /// grouped under the generic heading.
    pub chunk_type: String,

    /// Canonical base name of the source document, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_base_name: Option<String>,

    /// Similarity score from the search.
    pub score: f32,
}

impl RetrievedChunk {
    /// Extract a chunk from a Qdrant result payload.
    ///
    /// Returns `None` when the payload has no text content; malformed
    /// points are skipped, not errors. A missing chunk-type label falls
    /// back to the paragraph label.
    pub fn from_payload(payload_value: &Value, score: f32) -> Option<Self> {
        let content = payload_value.get(payload::TEXT)?.as_str()?.to_string();

        let chunk_type = payload_value
            .get(payload::CHUNK_TYPE)
            .and_then(|value| value.as_str())
            .unwrap_or(ChunkType::Paragraph.as_str())
            .to_string();

        let document_base_name = payload_value
            .get(payload::DOCUMENT_METADATA)
            .and_then(|metadata| metadata.get(payload::DOCUMENT_BASE_NAME))
            .and_then(|value| value.as_str())
            .map(|name| name.to_string());

        Some(Self {
            content,
            chunk_type,
            document_base_name,
            score,
        })
    }
}

// ============================================================================
// Synthesis
// ============================================================================

/// German heading for a chunk-type group.
fn group_heading(chunk_type: Option<ChunkType>) -> &'static str {
    match chunk_type {
        Some(ChunkType::Definition) => "Definitionen",
        Some(ChunkType::Abbreviation) => "Abkürzungen",
        Some(ChunkType::StructuredTable) => "Tabellen und Fristen",
        Some(ChunkType::Paragraph) | Some(ChunkType::FullText) | None => "Auszüge",
    }
}

/// Group order for an intent: the chunk types the intent cares about come
/// first, the generic excerpts last.
fn group_order(intent: IntentType) -> [Option<ChunkType>; 4] {
    match intent {
        IntentType::Definition => [
            Some(ChunkType::Definition),
            Some(ChunkType::Abbreviation),
            Some(ChunkType::StructuredTable),
            None,
        ],
        IntentType::TableData => [
            Some(ChunkType::StructuredTable),
            Some(ChunkType::Definition),
            Some(ChunkType::Abbreviation),
            None,
        ],
        IntentType::DocumentSpecific | IntentType::General => [
            None,
            Some(ChunkType::Definition),
            Some(ChunkType::Abbreviation),
            Some(ChunkType::StructuredTable),
        ],
    }
}

/// Whether a chunk belongs to a group slot.
///
/// The `None` slot collects paragraphs, full-text chunks, and unknown
/// labels.
fn belongs_to(chunk: &RetrievedChunk, slot: Option<ChunkType>) -> bool {
    let parsed = ChunkType::from_label(&chunk.chunk_type);
    match slot {
        Some(chunk_type) => parsed == Some(chunk_type),
        None => !matches!(
            parsed,
            Some(ChunkType::Definition)
                | Some(ChunkType::Abbreviation)
                | Some(ChunkType::StructuredTable)
        ),
    }
}

/// Render retrieved chunks into one context block.
///
/// Chunks keep their retrieval order within a group. Empty input yields an
/// empty string.
pub fn synthesize_context(chunks: &[RetrievedChunk], intent: IntentType) -> String {
    if chunks.is_empty() {
        return String::new();
    }

    let mut sections: Vec<String> = Vec::new();

    for slot in group_order(intent) {
        let members: Vec<&RetrievedChunk> = chunks
            .iter()
            .filter(|chunk| belongs_to(chunk, slot))
            .collect();
        if members.is_empty() {
            continue;
        }

        let mut section = format!("## {}", group_heading(slot));
        for chunk in members {
            section.push_str("\n\n");
            match &chunk.document_base_name {
                Some(base_name) => {
                    section.push_str(&format!("[Quelle: {base_name}]\n{}", chunk.content));
                }
                None => section.push_str(&chunk.content),
            }
        }
        sections.push(section);
    }

    debug!(
        "Synthesized context from {} chunks into {} sections",
        chunks.len(),
        sections.len()
    );

    sections.join("\n\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chunk(content: &str, chunk_type: &str, base_name: Option<&str>) -> RetrievedChunk {
        RetrievedChunk {
            content: content.to_string(),
            chunk_type: chunk_type.to_string(),
            document_base_name: base_name.map(|name| name.to_string()),
            score: 0.9,
        }
    }

    #[test]
    fn test_from_payload() {
        let payload = json!({
            "text": "Die Marktlokation ist der Ort der Energielieferung.",
            "chunk_type": "definition",
            "document_metadata": {
                "document_base_name": "BK6-24-174_GPKE_Teil1_Lesefassung",
                "document_name": "GPKE Teil 1"
            }
        });

        let chunk = RetrievedChunk::from_payload(&payload, 0.87).unwrap();
        assert_eq!(chunk.chunk_type, "definition");
        assert_eq!(
            chunk.document_base_name.as_deref(),
            Some("BK6-24-174_GPKE_Teil1_Lesefassung")
        );
        assert_eq!(chunk.score, 0.87);
    }

    #[test]
    fn test_from_payload_without_text_is_skipped() {
        let payload = json!({ "chunk_type": "definition" });
        assert!(RetrievedChunk::from_payload(&payload, 0.5).is_none());
    }

    #[test]
    fn test_from_payload_defaults_to_paragraph() {
        let payload = json!({ "text": "Inhalt ohne Typ" });
        let chunk = RetrievedChunk::from_payload(&payload, 0.5).unwrap();
        assert_eq!(chunk.chunk_type, "paragraph");
        assert!(chunk.document_base_name.is_none());
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(synthesize_context(&[], IntentType::General), "");
    }

    #[test]
    fn test_definition_intent_orders_definitions_first() {
        let chunks = vec![
            chunk("Frist: 10 Werktage", "structured_table", None),
            chunk("Die MaLo ist ...", "definition", None),
        ];

        let context = synthesize_context(&chunks, IntentType::Definition);
        let definitions = context.find("## Definitionen").unwrap();
        let tables = context.find("## Tabellen und Fristen").unwrap();
        assert!(definitions < tables);
    }

    #[test]
    fn test_table_intent_orders_tables_first() {
        let chunks = vec![
            chunk("Die MaLo ist ...", "definition", None),
            chunk("Frist: 10 Werktage", "structured_table", None),
        ];

        let context = synthesize_context(&chunks, IntentType::TableData);
        let tables = context.find("## Tabellen und Fristen").unwrap();
        let definitions = context.find("## Definitionen").unwrap();
        assert!(tables < definitions);
    }

    #[test]
    fn test_source_labels() {
        let chunks = vec![chunk(
            "Prozessbeschreibung Lieferantenwechsel.",
            "paragraph",
            Some("BK6-24-174_GPKE_Teil1_Lesefassung"),
        )];

        let context = synthesize_context(&chunks, IntentType::General);
        assert!(context.starts_with("## Auszüge"));
        assert!(context.contains("[Quelle: BK6-24-174_GPKE_Teil1_Lesefassung]"));
        assert!(context.contains("Prozessbeschreibung Lieferantenwechsel."));
    }

    #[test]
    fn test_unknown_labels_group_with_excerpts() {
        let chunks = vec![
            chunk("Unbekannter Typ", "visual_summary", None),
            chunk("Volltext", "full_text", None),
        ];

        let context = synthesize_context(&chunks, IntentType::General);
        assert_eq!(context.matches("## Auszüge").count(), 1);
        assert!(context.contains("Unbekannter Typ"));
        assert!(context.contains("Volltext"));
    }
}
