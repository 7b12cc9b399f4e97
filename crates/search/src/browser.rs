//! A browsing session: one catalog, its index, and the user's filter state.

use std::collections::BTreeSet;

use partscope_catalog::{CatalogSnapshot, Product};
use partscope_core::{SearchConfig, SnapshotId};

use crate::engine::{Resolved, resolve, resolve_scored};
use crate::filter::{FilterIntent, FilterState};
use crate::index::FuzzyIndex;
use crate::view::{BrowseView, ResultItem, TypeToggle, type_toggles};

/// Index and distinct types derived from the same snapshot.
///
/// Both are replaced together so neither can outlive the catalog it came from.
#[derive(Debug, Clone)]
struct Prepared {
    index: FuzzyIndex,
    types: BTreeSet<String>,
}

impl Prepared {
    fn build(snapshot: CatalogSnapshot, config: &SearchConfig) -> Self {
        let types = snapshot.distinct_types();
        let index = FuzzyIndex::build(snapshot, config);
        Self { index, types }
    }
}

/// Owns the filter state and the derived catalog data for one view.
///
/// Every mutation finishes synchronously. Replacing the catalog rebuilds the
/// index before returning, so no search can observe a catalog whose index is
/// not ready. Results are re-derived on every call; nothing is memoized.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    config: SearchConfig,
    prepared: Option<Prepared>,
    state: FilterState,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl CatalogBrowser {
    /// A session with no catalog loaded yet.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            prepared: None,
            state: FilterState::new(),
        }
    }

    pub fn with_catalog(config: SearchConfig, snapshot: CatalogSnapshot) -> Self {
        let mut browser = Self::new(config);
        browser.replace_catalog(Some(snapshot));
        browser
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Swap in a new catalog (or none). Filter state is kept as is.
    ///
    /// Handing over the snapshot that is already loaded is a no-op.
    pub fn replace_catalog(&mut self, snapshot: Option<CatalogSnapshot>) {
        match snapshot {
            Some(snapshot) if self.snapshot_id() == Some(snapshot.id()) => {
                tracing::trace!(snapshot = %snapshot.id(), "catalog unchanged; index kept");
            }
            Some(snapshot) => {
                tracing::debug!(
                    snapshot = %snapshot.id(),
                    products = snapshot.len(),
                    "catalog replaced"
                );
                self.prepared = Some(Prepared::build(snapshot, &self.config));
            }
            None => {
                if self.prepared.take().is_some() {
                    tracing::debug!("catalog cleared");
                }
            }
        }
    }

    pub fn snapshot(&self) -> Option<&CatalogSnapshot> {
        self.prepared.as_ref().map(|p| p.index.snapshot())
    }

    pub fn snapshot_id(&self) -> Option<SnapshotId> {
        self.snapshot().map(CatalogSnapshot::id)
    }

    /// Index for the current catalog; `None` while no catalog is loaded.
    pub fn index(&self) -> Option<&FuzzyIndex> {
        self.prepared.as_ref().map(|p| &p.index)
    }

    /// Flip `filter`; returns whether it is active afterwards.
    pub fn toggle(&mut self, filter: &str) -> bool {
        self.dispatch(&FilterIntent::Toggle(filter.to_string()));
        self.state.is_active(filter)
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.dispatch(&FilterIntent::SetQuery(text.into()));
    }

    /// Apply one intent to the filter state.
    pub fn dispatch(&mut self, intent: &FilterIntent) {
        self.state.apply(intent);
        tracing::trace!(
            ?intent,
            query = self.state.query(),
            active = self.state.active_filters().len(),
            "filter intent applied"
        );
    }

    /// Distinct types of the current catalog (empty without a catalog).
    pub fn distinct_types(&self) -> BTreeSet<String> {
        self.prepared
            .as_ref()
            .map(|p| p.types.clone())
            .unwrap_or_default()
    }

    pub fn type_toggles(&self) -> Vec<TypeToggle> {
        match &self.prepared {
            Some(p) => type_toggles(&p.types, &self.state),
            None => Vec::new(),
        }
    }

    /// Visible products in display order (empty without a catalog).
    pub fn results(&self) -> Vec<&Product> {
        match &self.prepared {
            Some(p) => resolve(&p.index, &self.state),
            None => Vec::new(),
        }
    }

    pub fn results_scored(&self) -> Vec<Resolved<'_>> {
        match &self.prepared {
            Some(p) => resolve_scored(&p.index, &self.state),
            None => Vec::new(),
        }
    }

    /// Owned snapshot of everything the presentation layer renders.
    pub fn view(&self) -> BrowseView {
        let results = self
            .results_scored()
            .into_iter()
            .map(|r| ResultItem {
                score: r.score,
                slug: r.product.slug(),
                product: r.product.clone(),
            })
            .collect();

        BrowseView {
            snapshot: self.snapshot_id(),
            query: self.state.query().to_string(),
            active_filters: self.state.active_filters().iter().cloned().collect(),
            types: self.type_toggles(),
            results,
        }
    }
}
