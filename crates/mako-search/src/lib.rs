//! # mako-search
//!
//! Vector-search integration layer for MaKo retrieval.
//!
//! This crate translates `mako-core` analysis results into the Qdrant query
//! DSL and back: filter construction, latest-document-version resolution,
//! and chunk-type-aware context synthesis. It holds no connection — the
//! caller owns the Qdrant client and hands the produced [`Filter`] (and the
//! expanded query) to its search call.
//!
//! ## Flow
//!
//! 1. Analyze the query with `mako_core::analyze_query`
//! 2. Resolve latest document versions from index metadata
//!    ([`latest_document_versions`])
//! 3. Build the filter ([`query_filter`]) — `None` means unrestricted
//! 4. Search Qdrant with the expanded query and the filter (external)
//! 5. Extract [`RetrievedChunk`]s from the result payloads and render the
//!    context block ([`synthesize_context`])
//!
//! ## Example
//!
//! ```
//! use mako_core::analyze_query;
//! use mako_search::{filter_summary, query_filter};
//!
//! let analysis = analyze_query("Liste der Fristen in der GPKE", None);
//! let filter = query_filter(&analysis, None).expect("document reference implies a filter");
//! assert_eq!(filter.must.len(), 2);
//! println!("{}", filter_summary(&analysis));
//! ```

pub mod context;
pub mod filter;
pub mod payload;
pub mod versions;

pub use context::{synthesize_context, RetrievedChunk};
pub use filter::{filter_summary, query_filter};
pub use versions::{latest_document_versions, DocumentVersionRecord};

// Re-export the filter type callers pass to their Qdrant search call.
pub use qdrant_client::qdrant::Filter;
