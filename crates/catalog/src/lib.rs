//! Product catalog model.
//!
//! This crate holds the catalog record type, immutable catalog snapshots, the
//! distinct-type derivation that drives filter toggles, and lenient JSON
//! ingestion. Everything except `ingest` is pure.

pub mod error;
pub mod ingest;
pub mod product;
pub mod snapshot;
pub mod text;

pub use error::{CatalogLoadError, CatalogResult};
pub use ingest::{load_catalog, load_snapshot, parse_catalog};
pub use product::Product;
pub use snapshot::{CatalogSnapshot, distinct_types};
pub use text::{DESCRIPTION_MAX_CHARS, to_kebab_case, truncate_description};
