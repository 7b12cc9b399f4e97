//! Search & filter resolution over a product catalog.
//!
//! Given a catalog snapshot, the active type filters and the query text, this
//! crate deterministically computes the visible products:
//!
//! - [`fuzzy`]: typo-tolerant substring scoring
//! - [`index`]: per-snapshot index over the searchable fields
//! - [`filter`]: the filter state and the intents that mutate it
//! - [`engine`]: the pure resolution function
//! - [`browser`]: a session tying the pieces together for a presentation layer

pub mod browser;
pub mod engine;
pub mod filter;
pub mod fuzzy;
pub mod index;
pub mod view;

pub use browser::CatalogBrowser;
pub use engine::{Resolved, resolve, resolve_scored};
pub use filter::{FilterIntent, FilterState};
pub use index::{FuzzyIndex, SearchHit};
pub use view::{BrowseView, ResultItem, TypeToggle, type_toggles};
