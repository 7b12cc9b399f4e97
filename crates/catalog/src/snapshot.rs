use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use partscope_core::SnapshotId;

use crate::product::Product;

/// An immutable, ordered catalog as emitted by the catalog provider.
///
/// Snapshots are never edited in place: a changed catalog is a new snapshot
/// with a new [`SnapshotId`]. Cloning is cheap (the products are shared).
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    id: SnapshotId,
    loaded_at: DateTime<Utc>,
    products: Arc<[Product]>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_id(SnapshotId::new(), products, Utc::now())
    }

    /// Build a snapshot with explicit identity (deterministic tests, replays).
    pub fn with_id(id: SnapshotId, products: Vec<Product>, loaded_at: DateTime<Utc>) -> Self {
        Self {
            id,
            loaded_at,
            products: products.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn distinct_types(&self) -> BTreeSet<String> {
        distinct_types(&self.products)
    }
}

/// Distinct `type` values present in `products`, as written in the source.
///
/// Blank types cannot be toggled on, so they are left out. Values differing
/// only in case are kept apart here; callers compare through the lower-cased
/// token.
pub fn distinct_types(products: &[Product]) -> BTreeSet<String> {
    let mut types = BTreeSet::new();
    let mut untyped = 0usize;

    for product in products {
        if product.product_type.trim().is_empty() {
            untyped += 1;
        } else {
            types.insert(product.product_type.clone());
        }
    }

    if untyped > 0 {
        tracing::warn!(untyped, "products without a type are not offered as filters");
    }

    types
}
