//! Trait definitions with mockall annotations for testing
//!
//! The pipeline reaches the filesystem only through these seams, so the core
//! flow can be exercised with mocks and the I/O services tested on their own.

use serde_json::Value;
use shared::ScoredRecord;

use crate::error::LeadgenResult;

/// Source of raw upstream records
#[mockall::automock]
pub trait RecordSource {
    /// Human-readable origin of the records, for logging
    fn describe(&self) -> String;

    /// Load every raw record.
    ///
    /// # Returns
    /// The elements of the top-level JSON array, unvalidated. Fails on I/O
    /// errors, invalid JSON, or a root that is not an array.
    fn load(&self) -> LeadgenResult<Vec<Value>>;
}

/// Destination for scored leads
#[mockall::automock]
pub trait LeadSink {
    /// Human-readable destination, for logging
    fn describe(&self) -> String;

    /// Write the whole scored table.
    ///
    /// # Returns
    /// Number of rows written.
    fn export(&self, leads: &[ScoredRecord]) -> LeadgenResult<usize>;
}
