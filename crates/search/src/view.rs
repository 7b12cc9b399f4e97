//! What the presentation layer needs to render one frame.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use partscope_catalog::Product;
use partscope_core::SnapshotId;

use crate::filter::FilterState;

/// A filter toggle offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeToggle {
    /// Upper-cased type, as shown on the toggle.
    pub label: String,
    /// Lower-cased token passed back in `toggle` intents.
    pub token: String,
    /// Whether the token is currently active.
    pub pressed: bool,
}

/// A resolved product plus its match score, if a query is active.
///
/// The product is nested under `product` so its own keys (including open
/// attributes) can never shadow `score` or `slug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub slug: String,
    pub product: Product,
}

/// Everything needed to render the catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseView {
    /// Snapshot the results were resolved from (`None` while no catalog is loaded).
    pub snapshot: Option<SnapshotId>,
    pub query: String,
    pub active_filters: Vec<String>,
    pub types: Vec<TypeToggle>,
    pub results: Vec<ResultItem>,
}

impl BrowseView {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Toggles for the given distinct types, one per lower-cased token.
///
/// Types differing only in case share a toggle. Output is sorted by token.
pub fn type_toggles(types: &BTreeSet<String>, state: &FilterState) -> Vec<TypeToggle> {
    let mut seen = BTreeSet::new();
    let mut toggles: Vec<TypeToggle> = types
        .iter()
        .filter_map(|ty| {
            let token = ty.to_lowercase();
            if !seen.insert(token.clone()) {
                return None;
            }
            Some(TypeToggle {
                label: ty.to_uppercase(),
                pressed: state.active_filters().contains(&token),
                token,
            })
        })
        .collect();
    toggles.sort_by(|a, b| a.token.cmp(&b.token));
    toggles
}
