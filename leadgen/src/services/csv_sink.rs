//! CSV file lead sink
//!
//! One header row, one row per scored record, no index column. Products are
//! written as a compact JSON cell. The whole table is rendered in memory and
//! written with a single call, so a rendering failure leaves no file behind.

use std::path::{Path, PathBuf};
use serde::Serialize;

use crate::error::{LeadgenError, LeadgenResult};
use crate::traits::LeadSink;
use shared::{ScoredRecord, Stage, stage_debug};

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "cleaned_leads.csv";

/// Flat CSV row; field order is the column order
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    company_name: &'a str,
    website: &'a str,
    description: &'a str,
    tags: &'a str,
    products: String,
    lead_score: u32,
}

impl<'a> CsvRow<'a> {
    fn from_scored(lead: &'a ScoredRecord) -> LeadgenResult<Self> {
        let record = &lead.record;
        Ok(Self {
            company_name: &record.company_name,
            website: &record.website,
            description: &record.description,
            tags: &record.tags,
            products: record.products_json()?,
            lead_score: lead.lead_score,
        })
    }
}

/// Render scored records as CSV bytes
pub fn render_csv(leads: &[ScoredRecord]) -> LeadgenResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if leads.is_empty() {
        // serialize() only emits headers alongside the first row
        writer.write_record(["company_name", "website", "description", "tags", "products", "lead_score"])?;
    }
    for lead in leads {
        writer.serialize(CsvRow::from_scored(lead)?)?;
    }

    writer
        .into_inner()
        .map_err(|e| LeadgenError::Csv(e.into_error().into()))
}

/// Writes scored leads to a CSV file
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for CsvFileSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}

impl LeadSink for CsvFileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn export(&self, leads: &[ScoredRecord]) -> LeadgenResult<usize> {
        let bytes = render_csv(leads)?;
        std::fs::write(&self.path, bytes).map_err(|e| LeadgenError::io(&self.path, e))?;

        stage_debug!(Stage::Export, "💾 Wrote {} leads to {}", leads.len(), self.path.display());
        Ok(leads.len())
    }
}

/// Export scored records to a CSV file
pub fn export_to_csv(leads: &[ScoredRecord], path: impl AsRef<Path>) -> LeadgenResult<usize> {
    CsvFileSink::new(path.as_ref()).export(leads)
}
