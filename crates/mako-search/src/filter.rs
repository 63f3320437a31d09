//! Qdrant filter construction from query analysis.
//!
//! Turns [`QueryAnalysis`] filter criteria into the Qdrant filter handed to
//! the vector search. All conditions are must-clauses (logical AND). The
//! single-value vs. value-list distinction on `Condition::matches` is
//! wire-format-significant — Qdrant's keyword match and keywords ("any of")
//! match are different operators — and must be preserved.

use qdrant_client::qdrant::{Condition, Filter};

use mako_core::QueryAnalysis;

use crate::payload;

// ============================================================================
// Filter Construction
// ============================================================================

/// Build the Qdrant filter for an analyzed query.
///
/// Clauses, all ANDed:
/// 1. Chunk-type restriction, when the analysis produced one. A single
///    chunk type becomes an equality match, several become an "any of"
///    match.
/// 2. Document restriction: an explicit document reference filters on its
///    base name; otherwise, when the analysis asks for latest-only results
///    and the caller supplied a non-empty `latest_versions` list, an
///    "any of" match on that list. The explicit reference always wins.
///
/// Returns `None` when no clause applies — an unrestricted search, not an
/// error.
pub fn query_filter(
    analysis: &QueryAnalysis,
    latest_versions: Option<&[String]>,
) -> Option<Filter> {
    let criteria = &analysis.filter_criteria;
    let mut must: Vec<Condition> = Vec::new();

    if let Some(chunk_types) = criteria.chunk_types.as_deref() {
        if let [single] = chunk_types {
            must.push(Condition::matches(
                payload::CHUNK_TYPE,
                single.as_str().to_string(),
            ));
        } else if !chunk_types.is_empty() {
            let labels: Vec<String> = chunk_types
                .iter()
                .map(|chunk_type| chunk_type.as_str().to_string())
                .collect();
            must.push(Condition::matches(payload::CHUNK_TYPE, labels));
        }
    }

    if let Some(base_name) = &criteria.document_base_name {
        must.push(Condition::matches(
            payload::DOCUMENT_BASE_NAME_PATH,
            base_name.clone(),
        ));
    } else if criteria.temporal.require_latest {
        match latest_versions {
            Some(latest) if !latest.is_empty() => {
                must.push(Condition::matches(
                    payload::DOCUMENT_BASE_NAME_PATH,
                    latest.to_vec(),
                ));
            }
            _ => {}
        }
    }

    if must.is_empty() {
        None
    } else {
        Some(Filter {
            must,
            ..Default::default()
        })
    }
}

// ============================================================================
// Filter Summary
// ============================================================================

/// One-line human-readable summary of an analysis, for logs.
///
/// Shape: `"Intent: X | Dokument: Y | Chunk-Types: A, B | Confidence: NN.N%"`;
/// the Dokument and Chunk-Types segments are omitted when absent.
pub fn filter_summary(analysis: &QueryAnalysis) -> String {
    let mut summary = format!("Intent: {}", analysis.intent);

    if let Some(reference) = &analysis.document_reference {
        summary.push_str(&format!(" | Dokument: {reference}"));
    }

    if let Some(chunk_types) = &analysis.filter_criteria.chunk_types {
        let labels: Vec<&str> = chunk_types
            .iter()
            .map(|chunk_type| chunk_type.as_str())
            .collect();
        summary.push_str(&format!(" | Chunk-Types: {}", labels.join(", ")));
    }

    summary.push_str(&format!(
        " | Confidence: {:.1}%",
        analysis.confidence * 100.0
    ));
    summary
}

// ============================================================================
// Tests
// ============================================================================
