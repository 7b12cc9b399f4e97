//! Filter state: the active type toggles plus the free-text query.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use partscope_catalog::Product;
use partscope_core::ValueObject;

/// A user intent coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum FilterIntent {
    /// Flip a type filter on or off.
    Toggle(String),
    /// Replace the search text.
    SetQuery(String),
}

/// Current query text and active type filters.
///
/// Only [`FilterState::toggle`] and [`FilterState::set_query`] (or
/// [`FilterState::apply`]) change it. Filter tokens are stored lower-cased;
/// tokens whose type has since vanished from the catalog are kept and simply
/// match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    query: String,
    active_filters: BTreeSet<String>,
}

impl ValueObject for FilterState {}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_filters(&self) -> &BTreeSet<String> {
        &self.active_filters
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_active(&self, filter: &str) -> bool {
        self.active_filters.contains(&filter.to_lowercase())
    }

    /// Flip membership of `filter` (compared lower-cased).
    ///
    /// Two identical toggles cancel out. Returns whether the filter is active
    /// afterwards.
    pub fn toggle(&mut self, filter: &str) -> bool {
        let token = filter.to_lowercase();
        if self.active_filters.remove(&token) {
            false
        } else {
            self.active_filters.insert(token);
            true
        }
    }

    /// Replace the query verbatim. An empty string means "no text filter".
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn apply(&mut self, intent: &FilterIntent) {
        match intent {
            FilterIntent::Toggle(filter) => {
                self.toggle(filter);
            }
            FilterIntent::SetQuery(text) => self.set_query(text.as_str()),
        }
    }

    /// Whether `product` passes the type filters.
    ///
    /// With no active filters every product passes; otherwise a product passes
    /// when its lower-cased type is one of the active tokens.
    pub fn admits(&self, product: &Product) -> bool {
        self.active_filters.is_empty() || self.active_filters.contains(&product.type_token())
    }
}
