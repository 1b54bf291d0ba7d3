//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// A raw upstream record: arbitrary string keys mapped to arbitrary JSON values
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Unique identifier for a single pipeline run
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pipeline step a log event or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Cli,
    Load,
    Normalize,
    Dedupe,
    Score,
    Export,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Cli => write!(f, "cli"),
            Stage::Load => write!(f, "load"),
            Stage::Normalize => write!(f, "normalize"),
            Stage::Dedupe => write!(f, "dedupe"),
            Stage::Score => write!(f, "score"),
            Stage::Export => write!(f, "export"),
        }
    }
}

/// A product a company sells, with its ingredient list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// `None` marks an ingredient that was `null` upstream
    pub ingredients: Vec<Option<String>>,
}

impl Product {
    pub fn new(name: impl Into<String>, ingredients: Vec<&str>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(|i| Some(i.to_string())).collect(),
        }
    }
}

/// A company record conformed to the fixed five-field schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub company_name: String,
    pub website: String,
    pub description: String,
    pub tags: String,
    pub products: Vec<Product>,
}

impl NormalizedRecord {
    /// Key used to decide whether two records describe the same company
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.company_name, &self.website)
    }

    /// Products rendered as compact JSON for flat-file export
    pub fn products_json(&self) -> SharedResult<String> {
        serde_json::to_string(&self.products).map_err(|e| SharedError::SerializationError {
            message: format!("products of '{}': {e}", self.company_name),
        })
    }
}

/// A normalized record with its lead score attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: NormalizedRecord,
    pub lead_score: u32,
}

impl ScoredRecord {
    pub fn new(record: NormalizedRecord, lead_score: u32) -> Self {
        Self { record, lead_score }
    }
}
