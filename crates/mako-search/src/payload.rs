//! Payload field conventions shared with the indexing pipeline.
//!
//! Every indexed point carries these payload fields. The dotted keys are
//! the nested-field syntax of the Qdrant query DSL; filters and payload
//! readers must agree on them, so they live here and nowhere else.

/// Chunk type label (see `mako_core::ChunkType`).
pub const CHUNK_TYPE: &str = "chunk_type";

/// The chunk's text content.
pub const TEXT: &str = "text";

/// Nested document metadata object.
pub const DOCUMENT_METADATA: &str = "document_metadata";

/// Canonical document base name, inside [`DOCUMENT_METADATA`].
pub const DOCUMENT_BASE_NAME: &str = "document_base_name";

/// Human-readable document title, inside [`DOCUMENT_METADATA`].
pub const DOCUMENT_NAME: &str = "document_name";

/// Publication date (RFC 3339), inside [`DOCUMENT_METADATA`].
pub const PUBLICATION_DATE: &str = "publication_date";

/// Dotted path to the document base name, as used in filter conditions.
pub const DOCUMENT_BASE_NAME_PATH: &str = "document_metadata.document_base_name";

// ============================================================================
// Tests
// ============================================================================
