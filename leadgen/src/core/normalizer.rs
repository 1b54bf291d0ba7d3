//! Field-name normalization for heterogeneous upstream records
//!
//! Each logical field has an ordered list of synonyms. The first synonym whose
//! value is present and truthy wins; otherwise the field takes its empty default.
//! Malformed values never fail normalization.

use serde_json::Value;
use shared::{NormalizedRecord, Product, RawRecord, Stage, stage_debug};

pub const COMPANY_NAME_KEYS: &[&str] = &["company_name", "company", "name"];
pub const WEBSITE_KEYS: &[&str] = &["website", "site", "url"];
pub const DESCRIPTION_KEYS: &[&str] = &["description", "desc", "info"];
pub const TAGS_KEYS: &[&str] = &["labels", "tags", "keywords"];
pub const PRODUCTS_KEYS: &[&str] = &["products", "items", "product_list"];

/// Maps raw records onto the fixed five-field schema
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one raw record. Total: never fails for an object input.
    pub fn normalize(&self, record: &RawRecord) -> NormalizedRecord {
        NormalizedRecord {
            company_name: resolve_text(record, COMPANY_NAME_KEYS),
            website: resolve_text(record, WEBSITE_KEYS),
            description: resolve_text(record, DESCRIPTION_KEYS),
            tags: resolve_text(record, TAGS_KEYS),
            products: resolve_products(record),
        }
    }
}

/// Normalize a single record with a default normalizer
pub fn normalize_record(record: &RawRecord) -> NormalizedRecord {
    Normalizer::new().normalize(record)
}

/// Truthiness of a JSON value: null, false, zero and empty containers are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// First present and truthy value among `keys`, in priority order
pub fn first_truthy<'a>(record: &'a RawRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| record.get(*key).filter(|value| is_truthy(value)))
}

/// Render a value as field text: strings verbatim, anything else as compact JSON
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn resolve_text(record: &RawRecord, keys: &[&str]) -> String {
    first_truthy(record, keys).map(value_text).unwrap_or_default()
}

fn resolve_products(record: &RawRecord) -> Vec<Product> {
    match first_truthy(record, PRODUCTS_KEYS) {
        Some(Value::Array(entries)) => entries.iter().filter_map(product_from_value).collect(),
        Some(other) => {
            stage_debug!(Stage::Normalize, "Ignoring non-array products value: {}", other);
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn product_from_value(value: &Value) -> Option<Product> {
    let Value::Object(entry) = value else {
        stage_debug!(Stage::Normalize, "Skipping non-object product entry: {}", value);
        return None;
    };

    let name = entry
        .get("name")
        .filter(|v| !v.is_null())
        .map(value_text)
        .unwrap_or_default();

    let ingredients = match entry.get("ingredients") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => None,
                other => Some(value_text(other)),
            })
            .collect(),
        _ => Vec::new(),
    };

    Some(Product { name, ingredients })
}
