//! Fuzzy index over the searchable product fields.

use partscope_catalog::{CatalogSnapshot, Product};
use partscope_core::{SearchConfig, SearchKey, SnapshotId, Threshold};

use crate::fuzzy::{Pattern, fold};

/// One product matched by a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Position of the product in the catalog snapshot.
    pub position: usize,
    /// Dissimilarity score (lower is better), always within the threshold.
    pub score: f64,
    /// Field that produced the best score.
    pub key: SearchKey,
}

#[derive(Debug, Clone)]
struct IndexedProduct {
    fields: Vec<Vec<char>>,
}

/// Search index built from one catalog snapshot.
///
/// The index owns (a cheap clone of) the snapshot it was built from, so a
/// search can never run against a different catalog than the one indexed.
/// Building folds every configured field once: `O(products * fields)`.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    snapshot: CatalogSnapshot,
    keys: Vec<SearchKey>,
    threshold: Threshold,
    entries: Vec<IndexedProduct>,
}

impl FuzzyIndex {
    pub fn build(snapshot: CatalogSnapshot, config: &SearchConfig) -> Self {
        let keys = config.keys().to_vec();

        let entries = snapshot
            .products()
            .iter()
            .map(|product| IndexedProduct {
                fields: keys.iter().map(|key| fold(product.field(*key))).collect(),
            })
            .collect();

        tracing::debug!(
            snapshot = %snapshot.id(),
            products = snapshot.len(),
            fields = keys.len(),
            threshold = %config.threshold,
            "fuzzy index built"
        );

        Self {
            snapshot,
            keys,
            threshold: config.threshold,
            entries,
        }
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn snapshot_id(&self) -> SnapshotId {
        self.snapshot.id()
    }

    pub fn products(&self) -> &[Product] {
        self.snapshot.products()
    }

    pub fn keys(&self) -> &[SearchKey] {
        &self.keys
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Products matching `query`, best match first.
    ///
    /// Ties keep catalog order. An empty query matches nothing here; callers
    /// wanting "no text filter" should skip the search altogether.
    pub fn search_scored(&self, query: &str) -> Vec<SearchHit> {
        let Some(pattern) = Pattern::new(query) else {
            return Vec::new();
        };

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                self.best_field(&pattern, entry)
                    .filter(|(score, _)| self.threshold.accepts(*score))
                    .map(|(score, key)| SearchHit { position, score, key })
            })
            .collect();

        // `sort_by` is stable, so equal scores stay in catalog order.
        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        hits
    }

    /// Products matching `query`, best match first.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let products = self.products();
        self.search_scored(query)
            .into_iter()
            .map(|hit| &products[hit.position])
            .collect()
    }

    fn best_field(&self, pattern: &Pattern, entry: &IndexedProduct) -> Option<(f64, SearchKey)> {
        let mut best: Option<(f64, SearchKey)> = None;
        for (field, key) in entry.fields.iter().zip(&self.keys) {
            let score = pattern.score_folded(field);
            if best.is_none_or(|(b, _)| score < b) {
                best = Some((score, *key));
            }
            if score == 0.0 {
                break;
            }
        }
        best
    }
}
