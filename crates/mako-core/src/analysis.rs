//! Query analysis orchestration.
//!
//! [`QueryAnalyzer`] ties the pieces together: intent classification over
//! the normalized query, document-reference resolution over the raw query,
//! then query expansion with the final intent. The whole pass is pure and
//! synchronous; a shared analyzer is safe to call from any number of
//! threads.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::constants::DOCUMENT_REFERENCE_BOOST;
use crate::documents::{builtin_alias_matchers, find_document_reference, AliasMatcher};
use crate::errors::AnalysisError;
use crate::expansion::expand_query;
use crate::intent::{classify, compile_patterns, DEFINITION_PATTERNS, TABLE_PATTERNS};
use crate::types::{AbbreviationIndex, FilterCriteria, IntentType, QueryAnalysis};

// ============================================================================
// QueryAnalyzer
// ============================================================================

/// Analyzes user queries into [`QueryAnalysis`] results.
///
/// Holds the compiled pattern tables and alias matchers; build one per
/// process (or use [`analyze_query`] for the shared default) and reuse it.
#[derive(Debug, Clone)]
pub struct QueryAnalyzer {
    definition_matchers: Vec<Regex>,
    table_matchers: Vec<Regex>,
    aliases: Vec<AliasMatcher>,
}

impl QueryAnalyzer {
    /// Create an analyzer with the built-in pattern and alias tables.
    pub fn new() -> Self {
        Self {
            definition_matchers: compile_patterns(DEFINITION_PATTERNS),
            table_matchers: compile_patterns(TABLE_PATTERNS),
            aliases: builtin_alias_matchers(),
        }
    }

    /// Create an analyzer with configured extensions appended after the
    /// built-in tables.
    ///
    /// Fails if a configured pattern or alias keyword does not compile.
    pub fn with_config(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let mut analyzer = Self::new();

        for source in &config.extra_definition_patterns {
            analyzer.definition_matchers.push(compile_user_pattern(source)?);
        }
        for source in &config.extra_table_patterns {
            analyzer.table_matchers.push(compile_user_pattern(source)?);
        }
        for alias in &config.extra_document_aliases {
            analyzer
                .aliases
                .push(AliasMatcher::new(&alias.keyword, &alias.base_name)?);
        }

        Ok(analyzer)
    }

    /// Analyze a query.
    ///
    /// Never fails: empty queries, missing abbreviation indexes, and queries
    /// matching nothing all produce a well-defined general-intent result.
    pub fn analyze(
        &self,
        query: &str,
        abbreviations: Option<&AbbreviationIndex>,
    ) -> QueryAnalysis {
        let normalized = query.trim().to_lowercase();
        debug!("Analyzing query: {}", query);

        let intent_match = classify(&normalized, &self.definition_matchers, &self.table_matchers);
        let mut intent = intent_match.intent;
        let mut confidence = intent_match.confidence;

        let mut filter_criteria = FilterCriteria {
            chunk_types: intent_match.chunk_types,
            ..FilterCriteria::default()
        };

        // Document references are scanned on the raw query: alias keywords
        // keep their original casing there.
        let mut document_reference = None;
        if let Some(hit) = find_document_reference(query, &self.aliases) {
            debug!(
                "Resolved document reference '{}' -> '{}'",
                hit.keyword(),
                hit.base_name()
            );
            document_reference = Some(hit.keyword().to_string());
            filter_criteria.document_base_name = Some(hit.base_name().to_string());
            if intent == IntentType::General {
                intent = IntentType::DocumentSpecific;
            }
            confidence = (confidence + DOCUMENT_REFERENCE_BOOST).min(1.0);
        }

        let expanded_query = expand_query(query, abbreviations, intent);

        debug!(
            "Query analyzed: intent={} confidence={:.2}",
            intent, confidence
        );

        QueryAnalysis {
            intent,
            document_reference,
            filter_criteria,
            expanded_query,
            confidence,
        }
    }
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile a user-supplied pattern source with a proper error.
fn compile_user_pattern(source: &str) -> Result<Regex, AnalysisError> {
    Regex::new(source).map_err(|err| AnalysisError::invalid_pattern(source, err.to_string()))
}

// ============================================================================
// Process-wide default analyzer
// ============================================================================

/// Shared analyzer with the built-in tables, built on first use.
static DEFAULT_ANALYZER: Lazy<QueryAnalyzer> = Lazy::new(QueryAnalyzer::new);

/// Analyze a query with the process-wide default analyzer.
///
/// Equivalent to `QueryAnalyzer::new().analyze(query, abbreviations)`
/// without recompiling the tables per call.
pub fn analyze_query(query: &str, abbreviations: Option<&AbbreviationIndex>) -> QueryAnalysis {
    DEFAULT_ANALYZER.analyze(query, abbreviations)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocumentAlias;
    use crate::types::ChunkType;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_definition_scenario() {
        let analysis = analyze_query("Was ist eine Marktlokation?", None);
        assert_eq!(analysis.intent, IntentType::Definition);
        assert_close(analysis.confidence, 0.9);
        assert_eq!(
            analysis.filter_criteria.chunk_types,
            Some(vec![ChunkType::Definition, ChunkType::Abbreviation])
        );
        assert!(analysis.document_reference.is_none());
        assert!(analysis.filter_criteria.document_base_name.is_none());
        assert_eq!(
            analysis.expanded_query,
            "Definition und Bedeutung: Was ist eine Marktlokation?"
        );
    }

    #[test]
    fn test_table_scenario_with_document_reference() {
        let analysis = analyze_query("Liste der Fristen in der GPKE", None);
        // The table intent is kept; the GPKE match must not downgrade it.
        assert_eq!(analysis.intent, IntentType::TableData);
        assert_close(analysis.confidence, 0.95);
        assert_eq!(analysis.document_reference.as_deref(), Some("GPKE"));
        assert_eq!(
            analysis.filter_criteria.document_base_name.as_deref(),
            Some("BK6-24-174_GPKE_Teil1_Lesefassung")
        );
        assert_eq!(
            analysis.filter_criteria.chunk_types,
            Some(vec![ChunkType::StructuredTable])
        );
    }

    #[test]
    fn test_general_scenario() {
        let analysis = analyze_query("Wie funktioniert der Lieferantenwechsel?", None);
        assert_eq!(analysis.intent, IntentType::General);
        assert_close(analysis.confidence, 0.7);
        assert!(analysis.filter_criteria.chunk_types.is_none());
        assert!(analysis.filter_criteria.document_base_name.is_none());
        assert!(analysis.filter_criteria.temporal.require_latest);
        assert_eq!(
            analysis.expanded_query,
            "Wie funktioniert der Lieferantenwechsel?"
        );
    }

    #[test]
    fn test_document_reference_upgrades_general() {
        let analysis = analyze_query("Prozessübersicht nach GPKE", None);
        assert_eq!(analysis.intent, IntentType::DocumentSpecific);
        assert_close(analysis.confidence, 0.8);
        assert_eq!(analysis.document_reference.as_deref(), Some("GPKE"));
        // Document-specific queries carry no chunk-type restriction and no
        // embedding prefix.
        assert!(analysis.filter_criteria.chunk_types.is_none());
        assert_eq!(analysis.expanded_query, "Prozessübersicht nach GPKE");
    }

    #[test]
    fn test_confidence_capped_at_one() {
        let config = AnalysisConfig {
            extra_definition_patterns: vec!["sondermuster".to_string()],
            ..AnalysisConfig::default()
        };
        let analyzer = QueryAnalyzer::with_config(&config).unwrap();
        // Definition base (0.9) plus the document boost lands exactly on the cap.
        let analysis = analyzer.analyze("Sondermuster zur GPKE", None);
        assert!(analysis.confidence <= 1.0);
        assert_close(analysis.confidence, 1.0);
    }

    #[test]
    fn test_abbreviation_index_feeds_expansion() {
        let mut abbreviations = AbbreviationIndex::new();
        abbreviations.insert("MaLo".to_string(), "Marktlokation".to_string());

        let analysis = analyze_query("Was bedeutet MaLo?", Some(&abbreviations));
        assert_eq!(analysis.intent, IntentType::Definition);
        assert_eq!(
            analysis.expanded_query,
            "Definition und Bedeutung: Was bedeutet MaLo (Marktlokation)?"
        );
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let mut abbreviations = AbbreviationIndex::new();
        abbreviations.insert("BK".to_string(), "Beschlusskammer".to_string());

        let first = analyze_query("Liste der Fristen in der GPKE", Some(&abbreviations));
        let second = analyze_query("Liste der Fristen in der GPKE", Some(&abbreviations));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_query() {
        let analysis = analyze_query("", None);
        assert_eq!(analysis.intent, IntentType::General);
        assert_close(analysis.confidence, 0.7);
        assert_eq!(analysis.expanded_query, "");
    }

    #[test]
    fn test_config_extends_aliases_after_builtins() {
        let config = AnalysisConfig {
            extra_document_aliases: vec![DocumentAlias {
                keyword: "EoG".to_string(),
                base_name: "EoG_Lesefassung".to_string(),
            }],
            ..AnalysisConfig::default()
        };
        let analyzer = QueryAnalyzer::with_config(&config).unwrap();

        let analysis = analyzer.analyze("Belieferung in der EoG", None);
        assert_eq!(analysis.document_reference.as_deref(), Some("EoG"));
        assert_eq!(
            analysis.filter_criteria.document_base_name.as_deref(),
            Some("EoG_Lesefassung")
        );

        // Built-ins still win when both occur.
        let analysis = analyzer.analyze("EoG Abgrenzung zur GPKE", None);
        assert_eq!(analysis.document_reference.as_deref(), Some("GPKE"));
    }

    #[test]
    fn test_config_invalid_pattern_is_rejected() {
        let config = AnalysisConfig {
            extra_table_patterns: vec!["([unclosed".to_string()],
            ..AnalysisConfig::default()
        };
        let err = QueryAnalyzer::with_config(&config).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidPattern { .. }));
    }

    #[test]
    fn test_default_config_matches_builtin_analyzer() {
        let configured = QueryAnalyzer::with_config(&AnalysisConfig::default()).unwrap();
        let builtin = QueryAnalyzer::new();

        for query in [
            "Was ist eine MaLo?",
            "Liste der Fristen in der GPKE",
            "Wie funktioniert der Lieferantenwechsel?",
        ] {
            assert_eq!(configured.analyze(query, None), builtin.analyze(query, None));
        }
    }
}
