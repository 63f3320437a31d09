//! Common constants used throughout mako-core.
//!
//! Confidence values and expansion prefixes are centralized here so the
//! classifier, the analyzer, and the tests agree on the exact numbers.

// ============================================================================
// Confidence Values
// ============================================================================

/// Base confidence for a definition-intent match.
pub const CONFIDENCE_DEFINITION: f32 = 0.9;

/// Base confidence for a table-data-intent match.
pub const CONFIDENCE_TABLE_DATA: f32 = 0.85;

/// Base confidence for the general fallback intent.
pub const CONFIDENCE_GENERAL: f32 = 0.7;

/// Confidence boost applied when a document reference is resolved.
///
/// The result is capped at 1.0.
pub const DOCUMENT_REFERENCE_BOOST: f32 = 0.1;

// ============================================================================
// Expansion Prefixes
// ============================================================================

/// Prefix prepended to definition-intent queries before embedding.
pub const DEFINITION_PREFIX: &str = "Definition und Bedeutung: ";

/// Prefix prepended to table-data-intent queries before embedding.
pub const TABLE_DATA_PREFIX: &str = "Tabellarische Daten und Listen: ";

// ============================================================================
// Tests
// ============================================================================
