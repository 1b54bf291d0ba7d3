//! Pipeline orchestrator
//!
//! Load → normalize (per record) → dedupe (batch) → score (per record) → export.
//! The whole batch is computed before anything is exported, so a failure in
//! any stage aborts the run with no output written.

use std::path::Path;
use serde_json::Value;

use shared::{
    NormalizedRecord, RunId, ScoredRecord, Stage, logging, stage_debug, stage_info,
};

use crate::{
    core::{DedupStats, Deduplicator, Normalizer, Scorer, ScoringRubric},
    error::{LeadgenError, LeadgenResult, json_type_name},
    services::load_data,
    traits::{LeadSink, RecordSource},
};

/// Summary of the score distribution in a scored table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSummary {
    /// Leads with a score above zero
    pub scored_leads: usize,
    pub max_score: u32,
    pub mean_score: f64,
}

impl ScoreSummary {
    pub fn from_leads(leads: &[ScoredRecord]) -> Self {
        if leads.is_empty() {
            return Self::default();
        }

        let total: u64 = leads.iter().map(|l| u64::from(l.lead_score)).sum();
        Self {
            scored_leads: leads.iter().filter(|l| l.lead_score > 0).count(),
            max_score: leads.iter().map(|l| l.lead_score).max().unwrap_or_default(),
            mean_score: total as f64 / leads.len() as f64,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub run_id: RunId,
    pub loaded: usize,
    pub dedup: DedupStats,
    pub exported: usize,
    pub scores: ScoreSummary,
}

/// Map every raw element to a normalized record.
///
/// Fails on the first element that is not a JSON object.
pub fn normalize_batch(normalizer: &Normalizer, raw: &[Value]) -> LeadgenResult<Vec<NormalizedRecord>> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(record) => Ok(normalizer.normalize(record)),
            other => Err(LeadgenError::NotAnObject {
                index,
                found: json_type_name(other).to_string(),
            }),
        })
        .collect()
}

/// Attach a lead score to every record
pub fn score_batch(scorer: &Scorer, records: Vec<NormalizedRecord>) -> Vec<ScoredRecord> {
    records
        .into_iter()
        .map(|record| {
            let score = scorer.score(&record);
            ScoredRecord::new(record, score)
        })
        .collect()
}

/// Load, normalize, dedupe and score a JSON file with the default rubric
pub fn process_file(path: impl AsRef<Path>) -> LeadgenResult<Vec<ScoredRecord>> {
    let raw = load_data(path)?;
    let normalized = normalize_batch(&Normalizer::new(), &raw)?;
    let unique = Deduplicator::new().filter_unique(normalized);
    Ok(score_batch(&Scorer::default(), unique))
}

/// Runs the lead pipeline between an injected source and sink
pub struct Pipeline<S, K>
where
    S: RecordSource,
    K: LeadSink,
{
    source: S,
    sink: K,
    normalizer: Normalizer,
    scorer: Scorer,
    run_id: RunId,
}

impl<S, K> Pipeline<S, K>
where
    S: RecordSource,
    K: LeadSink,
{
    /// Create a pipeline with the default rubric
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            normalizer: Normalizer::new(),
            scorer: Scorer::default(),
            run_id: RunId::new(),
        }
    }

    pub fn with_rubric(mut self, rubric: ScoringRubric) -> Self {
        self.scorer = Scorer::new(rubric);
        self
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    /// Produce the scored table without exporting it
    pub fn process(&self) -> LeadgenResult<Vec<ScoredRecord>> {
        self.process_with_stats().map(|(leads, _, _)| leads)
    }

    fn process_with_stats(&self) -> LeadgenResult<(Vec<ScoredRecord>, usize, DedupStats)> {
        logging::log_progress(Stage::Load, "Loading records", &self.source.describe());
        let raw = self.source.load()?;
        let loaded = raw.len();

        let normalized = normalize_batch(&self.normalizer, &raw)?;
        stage_debug!(Stage::Normalize, "Normalized {} records", normalized.len());

        let mut deduplicator = Deduplicator::new();
        let unique = deduplicator.filter_unique(normalized);
        let dedup = deduplicator.get_stats().clone();
        stage_info!(
            Stage::Dedupe,
            "🧹 {} unique companies ({} duplicates dropped)",
            dedup.unique_found,
            dedup.duplicates_dropped
        );

        let leads = score_batch(&self.scorer, unique);
        stage_debug!(Stage::Score, "Scored {} leads", leads.len());

        Ok((leads, loaded, dedup))
    }

    /// Process the source and export the scored table to the sink
    pub fn run(&self) -> LeadgenResult<PipelineReport> {
        stage_debug!(Stage::Cli, "Run {}", self.run_id);
        let (leads, loaded, dedup) = self.process_with_stats()?;

        let exported = self.sink.export(&leads)?;
        logging::log_progress(
            Stage::Export,
            "Exported leads",
            &format!("{} rows to {}", exported, self.sink.describe()),
        );

        let scores = ScoreSummary::from_leads(&leads);
        stage_info!(
            Stage::Score,
            "📈 {} of {} leads scored above zero (max {}, mean {:.1})",
            scores.scored_leads,
            leads.len(),
            scores.max_score,
            scores.mean_score
        );

        Ok(PipelineReport {
            run_id: self.run_id.clone(),
            loaded,
            dedup,
            exported,
            scores,
        })
    }
}
