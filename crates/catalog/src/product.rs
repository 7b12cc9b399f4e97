use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use partscope_core::SearchKey;

use crate::text::{to_kebab_case, truncate_description};

/// One catalog item.
///
/// The four identifying fields (`partNumber`, `type`, `OEM`, `compatibleWith`)
/// are first-class strings; missing or `null` values become `""` so a sparse
/// record is still indexable. Everything else is display data carried through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "partNumber", default, deserialize_with = "lenient_string")]
    pub part_number: String,

    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub product_type: String,

    #[serde(rename = "OEM", default, deserialize_with = "lenient_string")]
    pub oem: String,

    #[serde(rename = "compatibleWith", default, deserialize_with = "lenient_string")]
    pub compatible_with: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_string_list")]
    pub images: Vec<String>,

    /// Any other display attributes present on the source record.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, JsonValue>,
}

impl Product {
    pub fn new(part_number: impl Into<String>, product_type: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            product_type: product_type.into(),
            ..Self::default()
        }
    }

    pub fn with_oem(mut self, oem: impl Into<String>) -> Self {
        self.oem = oem.into();
        self
    }

    pub fn with_compatible_with(mut self, compatible_with: impl Into<String>) -> Self {
        self.compatible_with = compatible_with.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Text of one searchable field.
    pub fn field(&self, key: SearchKey) -> &str {
        match key {
            SearchKey::PartNumber => &self.part_number,
            SearchKey::Type => &self.product_type,
            SearchKey::Oem => &self.oem,
            SearchKey::CompatibleWith => &self.compatible_with,
        }
    }

    /// Lower-cased `type`, the form filter tokens are compared in.
    pub fn type_token(&self) -> String {
        self.product_type.to_lowercase()
    }

    /// Whether any of the four searchable fields is blank.
    pub fn has_blank_search_field(&self) -> bool {
        SearchKey::ALL
            .iter()
            .any(|key| self.field(*key).trim().is_empty())
    }

    /// URL-friendly slug for linking to a product page.
    ///
    /// Derived from the name; falls back to the part number for unnamed items.
    pub fn slug(&self) -> String {
        let slug = to_kebab_case(&self.name);
        if slug.is_empty() {
            to_kebab_case(&self.part_number)
        } else {
            slug
        }
    }

    /// Card-sized description (at most `max_chars` characters plus an ellipsis).
    pub fn short_description(&self, max_chars: usize) -> String {
        truncate_description(&self.description, max_chars)
    }
}

/// Accept strings, scalars and string arrays; anything else reads as empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(json_to_text(&value))
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(match value {
        JsonValue::Array(items) => items
            .iter()
            .map(json_to_text)
            .filter(|s| !s.is_empty())
            .collect(),
        JsonValue::String(s) if !s.is_empty() => vec![s],
        _ => Vec::new(),
    })
}

fn json_to_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Array(items) => items
            .iter()
            .map(json_to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        JsonValue::Null | JsonValue::Object(_) => String::new(),
    }
}
