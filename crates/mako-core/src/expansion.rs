//! Query expansion for embedding quality.
//!
//! Two rewrite steps run before a query is embedded:
//!
//! 1. **Abbreviation expansion** — every whole-word occurrence of a known
//!    short form is replaced by `"<short form> (<full term>)"`, so the
//!    embedding sees both the token users type and the term the documents
//!    use.
//! 2. **Intent prefix** — definition and table queries get a German prefix
//!    steering the embedding towards glossary or table chunks.

use regex::{NoExpand, Regex};

use crate::constants::{DEFINITION_PREFIX, TABLE_DATA_PREFIX};
use crate::types::{AbbreviationIndex, IntentType};

/// Replace every whole-word occurrence of each indexed abbreviation with
/// `"<abbreviation> (<full term>)"`.
///
/// Replacements operate on the progressively rewritten string in index
/// order, so output is deterministic for a given index. Abbreviations are
/// expected to be disjoint tokens; overlaps resolve in index order.
pub fn expand_abbreviations(query: &str, abbreviations: &AbbreviationIndex) -> String {
    let mut expanded = query.to_string();

    for (abbrev, full_term) in abbreviations {
        let source = format!(r"(?i)\b{}\b", regex::escape(abbrev));
        if let Ok(pattern) = Regex::new(&source) {
            if pattern.is_match(&expanded) {
                let replacement = format!("{abbrev} ({full_term})");
                expanded = pattern
                    .replace_all(&expanded, NoExpand(&replacement))
                    .into_owned();
            }
        }
    }

    expanded
}

/// The embedding prefix implied by an intent, if any.
pub fn intent_prefix(intent: IntentType) -> Option<&'static str> {
    match intent {
        IntentType::Definition => Some(DEFINITION_PREFIX),
        IntentType::TableData => Some(TABLE_DATA_PREFIX),
        IntentType::DocumentSpecific | IntentType::General => None,
    }
}

/// Produce the final expanded query: abbreviation expansion (skipped when no
/// index is supplied) followed by the intent prefix.
pub fn expand_query(
    query: &str,
    abbreviations: Option<&AbbreviationIndex>,
    intent: IntentType,
) -> String {
    let expanded = match abbreviations {
        Some(index) => expand_abbreviations(query, index),
        None => query.to_string(),
    };

    match intent_prefix(intent) {
        Some(prefix) => format!("{prefix}{expanded}"),
        None => expanded,
    }
}

// ============================================================================
// Tests
// ============================================================================
