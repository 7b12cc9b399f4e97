//! JSON catalog ingestion.
//!
//! The catalog provider hands over a JSON array of product records. Records
//! are decoded leniently: absent searchable fields read as empty strings and
//! never reject the record. Only structurally wrong input (not JSON, not an
//! array, a non-object element) is an error.

use std::io::Read;

use serde_json::Value as JsonValue;

use crate::error::{CatalogLoadError, CatalogResult};
use crate::product::Product;
use crate::snapshot::CatalogSnapshot;

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str) -> CatalogResult<Vec<Product>> {
    let root: JsonValue = serde_json::from_str(json)?;
    decode_root(root)
}

/// Read and parse a catalog from any reader.
pub fn load_catalog<R: Read>(mut reader: R) -> CatalogResult<Vec<Product>> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_catalog(&buf)
}

/// Read a catalog and wrap it in a fresh snapshot.
pub fn load_snapshot<R: Read>(reader: R) -> CatalogResult<CatalogSnapshot> {
    Ok(CatalogSnapshot::new(load_catalog(reader)?))
}

fn decode_root(root: JsonValue) -> CatalogResult<Vec<Product>> {
    let records = match root {
        JsonValue::Array(records) => records,
        other => {
            return Err(CatalogLoadError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    let mut products = Vec::with_capacity(records.len());
    let mut sparse = 0usize;

    for (index, record) in records.into_iter().enumerate() {
        if !record.is_object() {
            return Err(CatalogLoadError::NotAnObject {
                index,
                found: json_kind(&record),
            });
        }

        let product: Product = serde_json::from_value(record)
            .map_err(|source| CatalogLoadError::Record { index, source })?;

        if product.has_blank_search_field() {
            sparse += 1;
        }
        products.push(product);
    }

    if sparse > 0 {
        tracing::warn!(
            records = products.len(),
            sparse,
            "catalog records with blank searchable fields (indexed as empty text)"
        );
    }
    tracing::debug!(records = products.len(), "catalog decoded");

    Ok(products)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
