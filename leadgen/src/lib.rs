//! Lead normalization and scoring pipeline
//!
//! Loads loosely-structured company records, conforms them to a fixed schema,
//! drops duplicate companies and scores each survivor against a corn-starch
//! supply-chain keyword rubric.

pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use core::{
    DedupStats, Deduplicator, Normalizer, ScoreBreakdown, Scorer, ScoringRubric, normalize_record,
    remove_duplicates, score_lead,
};
pub use error::{LeadgenError, LeadgenResult};
pub use pipeline::{Pipeline, PipelineReport, ScoreSummary, process_file};
pub use services::{CsvFileSink, JsonFileSource, export_to_csv, load_data};
pub use traits::{LeadSink, MockLeadSink, MockRecordSource, RecordSource};
