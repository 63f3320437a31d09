//! Latest-document-version resolution.
//!
//! Regulatory documents are re-published as revisions ("Lesefassungen");
//! each revision is indexed under its own document base name. Searches
//! without an explicit document reference should only see the current
//! revision of each family. The collaborator that reads version metadata
//! out of the index stays external; the resolution itself is a pure fold
//! over the supplied records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// DocumentVersionRecord
// ============================================================================

/// Version metadata for one indexed document revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVersionRecord {
    /// The document base name this revision is indexed under.
    pub document_base_name: String,

    /// The document family the revision belongs to (e.g. "GPKE").
    pub family: String,

    /// Publication date of the revision.
    pub published_at: DateTime<Utc>,
}

impl DocumentVersionRecord {
    /// Create a version record.
    pub fn new(
        document_base_name: impl Into<String>,
        family: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            document_base_name: document_base_name.into(),
            family: family.into(),
            published_at,
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the latest revision per document family.
///
/// Picks, for every family, the record with the newest publication date;
/// ties resolve to the lexicographically greatest base name, so the result
/// is deterministic under permutation of the input. Returns the winning
/// base names sorted ascending.
pub fn latest_document_versions(records: &[DocumentVersionRecord]) -> Vec<String> {
    let mut latest: BTreeMap<&str, &DocumentVersionRecord> = BTreeMap::new();

    for record in records {
        let supersedes = match latest.get(record.family.as_str()) {
            Some(current) => {
                (record.published_at, record.document_base_name.as_str())
                    > (current.published_at, current.document_base_name.as_str())
            }
            None => true,
        };
        if supersedes {
            latest.insert(record.family.as_str(), record);
        }
    }

    let mut winners: Vec<String> = latest
        .into_values()
        .map(|record| record.document_base_name.clone())
        .collect();
    winners.sort();
    winners
}

// ============================================================================
// Tests
// ============================================================================
