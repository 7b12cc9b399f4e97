//! Catalog ingestion errors.

use thiserror::Error;

/// Result type for catalog ingestion.
pub type CatalogResult<T> = Result<T, CatalogLoadError>;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog root must be a JSON array of products (found {found})")]
    NotAnArray { found: &'static str },

    #[error("catalog record {index} is not a JSON object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    #[error("catalog record {index} could not be decoded: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
