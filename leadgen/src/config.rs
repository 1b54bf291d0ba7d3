//! Pipeline configuration

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::core::ScoringRubric;
use crate::error::{LeadgenError, LeadgenResult};
use crate::services::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Paths and settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// JSON array of raw records
    pub input: PathBuf,

    /// CSV destination
    pub output: PathBuf,

    /// Optional JSON rubric overriding the default weights and keywords
    pub rubric: Option<PathBuf>,

    pub log_level: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            rubric: None,
            log_level: "info".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> LeadgenResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(LeadgenError::config(format!(
                "Unknown log level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.input == self.output {
            return Err(LeadgenError::config(format!(
                "Input and output both point at {}",
                self.input.display()
            )));
        }
        Ok(())
    }

    /// The configured rubric, or the default one when none is set
    pub fn load_rubric(&self) -> LeadgenResult<ScoringRubric> {
        match &self.rubric {
            None => Ok(ScoringRubric::default()),
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| LeadgenError::io(path, e))?;
                Ok(ScoringRubric::from_json(&content)?)
            }
        }
    }
}
