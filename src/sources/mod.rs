//! Remote citation-count sources.
//!
//! Every failure a source can hit is a [`SourceError`]; the resolver treats all of
//! them as soft and moves on to the next source in its list.

pub mod crossref;
pub mod http;
pub mod semantic_scholar;

pub use crossref::CrossrefSource;
pub use http::*;
pub use semantic_scholar::SemanticScholarSource;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Why a single source lookup failed
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid endpoint URL: {0}")]
    Url(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected response: {0}")]
    Shape(&'static str),
}

/// A remote service that can report how often a DOI has been cited
#[async_trait]
pub trait CitationSource: Send + Sync {
    /// Human-readable name used in log lines
    fn name(&self) -> &str;

    /// Look up the citation count for one DOI
    async fn citation_count(&self, doi: &str) -> Result<u64, SourceError>;
}

/// Read a count field. Absent or null counts as zero.
pub(crate) fn count_field(object: &Value, field: &'static str) -> Result<u64, SourceError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value
            .as_u64()
            .ok_or(SourceError::Shape("count is not a non-negative integer")),
    }
}
