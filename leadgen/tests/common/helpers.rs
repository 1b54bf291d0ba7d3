//! Test helpers and builder patterns for leadgen tests

use std::path::PathBuf;
use leadgen::{MockLeadSink, MockRecordSource, Pipeline, ScoringRubric};
use serde_json::Value;
use tempfile::TempDir;

/// Builder for pipelines over mock I/O with sensible defaults
pub struct PipelineBuilder {
    source: MockRecordSource,
    sink: MockLeadSink,
    rubric: Option<ScoringRubric>,
}

impl PipelineBuilder {
    /// Create a builder whose source yields `records` and whose sink accepts anything
    pub fn new(records: Value) -> Self {
        let mut source = MockRecordSource::new();
        let mut sink = MockLeadSink::new();

        let items = match records {
            Value::Array(items) => items,
            other => vec![other],
        };
        source.expect_describe().returning(|| "fixture".to_string()).times(0..);
        source.expect_load().returning(move || Ok(items.clone())).times(0..);

        sink.expect_describe().returning(|| "memory".to_string()).times(0..);
        sink.expect_export().returning(|leads| Ok(leads.len())).times(0..);

        Self { source, sink, rubric: None }
    }

    /// Configure the sink mock with a setup function
    pub fn with_sink<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockLeadSink),
    {
        self.sink = MockLeadSink::new();
        self.sink.expect_describe().returning(|| "memory".to_string()).times(0..);
        setup(&mut self.sink);
        self
    }

    pub fn with_rubric(mut self, rubric: ScoringRubric) -> Self {
        self.rubric = Some(rubric);
        self
    }

    pub fn build(self) -> Pipeline<MockRecordSource, MockLeadSink> {
        let pipeline = Pipeline::new(self.source, self.sink);
        match self.rubric {
            Some(rubric) => pipeline.with_rubric(rubric),
            None => pipeline,
        }
    }
}

/// Filesystem-backed helpers
pub struct TestHelpers;

impl TestHelpers {
    /// Write `records` as JSON into a fresh temp dir, returning the dir and file path
    pub fn write_input(records: &Value) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input_data.json");
        std::fs::write(&path, serde_json::to_string_pretty(records).unwrap()).unwrap();
        (dir, path)
    }

    /// Write raw text as the input file
    pub fn write_raw_input(content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input_data.json");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    /// Read a CSV file back as header plus rows of cells
    pub fn read_csv(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_path(path).unwrap();
        let header = reader.headers().unwrap().iter().map(str::to_string).collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        (header, rows)
    }

    /// Scores in table order
    pub fn scores(leads: &[shared::ScoredRecord]) -> Vec<u32> {
        leads.iter().map(|l| l.lead_score).collect()
    }
}
