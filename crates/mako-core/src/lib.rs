//! # mako-core
//!
//! Query analysis core for energy-market-communication (MaKo) retrieval.
//!
//! This crate turns free-text user questions about the German energy market
//! into structured [`QueryAnalysis`] results: a classified intent, a
//! resolved regulatory-document reference, filter criteria for the vector
//! search, and a rewritten query for embedding. It is pure domain logic —
//! no I/O, no networking — consumed by a retrieval orchestration layer and
//! by the `mako-search` filter builder.
//!
//! ## Main Types
//!
//! - [`QueryAnalyzer`] – compiled pattern/alias tables plus the analysis pass
//! - [`QueryAnalysis`] – the per-query analysis result
//! - [`AnalysisConfig`] – deployment extensions to the built-in tables
//! - [`AnalysisError`] – configuration errors (analysis itself never fails)
//!
//! ## Modules
//!
//! - [`analysis`] – the analyzer and the [`analyze_query`] entry point
//! - [`intent`] – intent classification pattern tables
//! - [`documents`] – document alias table and reference resolution
//! - [`expansion`] – abbreviation expansion and intent prefixes
//! - [`config`] – analyzer configuration
//! - [`types`] – common types
//!
//! ## Example
//!
//! ```
//! use mako_core::{analyze_query, IntentType};
//!
//! let analysis = analyze_query("Liste der Fristen in der GPKE", None);
//! assert_eq!(analysis.intent, IntentType::TableData);
//! assert_eq!(analysis.document_reference.as_deref(), Some("GPKE"));
//! ```

// Modules
pub mod analysis;
pub mod config;
pub mod constants;
pub mod documents;
pub mod errors;
pub mod expansion;
pub mod intent;
pub mod types;

// Re-exports for convenience
pub use analysis::{analyze_query, QueryAnalyzer};
pub use config::{AnalysisConfig, DocumentAlias};
pub use constants::{
    CONFIDENCE_DEFINITION, CONFIDENCE_GENERAL, CONFIDENCE_TABLE_DATA, DEFINITION_PREFIX,
    DOCUMENT_REFERENCE_BOOST, TABLE_DATA_PREFIX,
};
pub use documents::{find_document_reference, AliasMatcher, DOCUMENT_MAPPINGS};
pub use errors::AnalysisError;
pub use expansion::{expand_abbreviations, expand_query, intent_prefix};
pub use intent::{classify, IntentMatch, DEFINITION_PATTERNS, TABLE_PATTERNS};
pub use types::{
    AbbreviationIndex, ChunkType, FilterCriteria, IntentType, QueryAnalysis, TemporalCriteria,
};
