//! Document alias table and reference resolution.
//!
//! Users refer to the regulatory framework documents of the German energy
//! market by their short names ("GPKE", "MaBiS", …) rather than the full
//! BNetzA decision titles. This module maps those alias keywords to the
//! canonical document base names used in the vector index.

use regex::Regex;

use crate::errors::AnalysisError;

// ============================================================================
// Alias Table
// ============================================================================

/// Fixed mapping from alias keyword to canonical document base name.
///
/// Keys are unique and matched case-insensitively as whole words. Lookup is
/// first-match-wins in table order, so longer, more specific keywords must
/// come before any keyword they could shadow.
pub const DOCUMENT_MAPPINGS: &[(&str, &str)] = &[
    ("GPKE", "BK6-24-174_GPKE_Teil1_Lesefassung"),
    ("GeLi Gas", "BK7-22-329_GeLi_Gas_Lesefassung"),
    ("WiM", "BK6-24-175_WiM_Strom_Teil1_Lesefassung"),
    ("MaBiS", "BK6-24-179_MaBiS_Lesefassung"),
    ("MPES", "BK6-22-024_MPES_Lesefassung"),
    ("KoV", "KoV_12_Kooperationsvereinbarung_Gas"),
    ("UTILMD", "UTILMD_AHB_Strom_2_1"),
    ("MSCONS", "MSCONS_AHB_3_1"),
    ("INVOIC", "INVOIC_AHB_2_5"),
    ("REMADV", "REMADV_AHB_2_5"),
];

// ============================================================================
// AliasMatcher
// ============================================================================

/// A compiled alias: keyword, canonical base name, and the word-boundary
/// pattern used to find the keyword in a raw query.
#[derive(Debug, Clone)]
pub struct AliasMatcher {
    keyword: String,
    base_name: String,
    pattern: Regex,
}

impl AliasMatcher {
    /// Compile an alias matcher for a keyword.
    ///
    /// The keyword is matched case-insensitively and only as a whole word,
    /// so "WiM" does not fire inside "Wimpern".
    pub fn new(
        keyword: impl Into<String>,
        base_name: impl Into<String>,
    ) -> Result<Self, AnalysisError> {
        let keyword = keyword.into();
        let source = format!(r"(?i)\b{}\b", regex::escape(&keyword));
        let pattern = Regex::new(&source)
            .map_err(|err| AnalysisError::invalid_alias(&keyword, err.to_string()))?;

        Ok(Self {
            keyword,
            base_name: base_name.into(),
            pattern,
        })
    }

    /// The alias keyword (original casing from the table).
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The canonical document base name the keyword maps to.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Check whether the keyword occurs in the query as a whole word.
    pub fn matches(&self, query: &str) -> bool {
        self.pattern.is_match(query)
    }
}

/// Compile the built-in alias table.
///
/// Table entries are static literals; any entry that fails to compile is
/// skipped (guarded by a test below).
pub(crate) fn builtin_alias_matchers() -> Vec<AliasMatcher> {
    DOCUMENT_MAPPINGS
        .iter()
        .filter_map(|(keyword, base_name)| AliasMatcher::new(*keyword, *base_name).ok())
        .collect()
}

/// Find the first alias that occurs in the query as a whole word.
///
/// The scan runs over the *original* (non-lowercased) query and stops at the
/// first hit; multi-document queries resolve to the earliest table entry.
pub fn find_document_reference<'a>(
    query: &str,
    matchers: &'a [AliasMatcher],
) -> Option<&'a AliasMatcher> {
    matchers.iter().find(|matcher| matcher.matches(query))
}

// ============================================================================
// Tests
// ============================================================================
