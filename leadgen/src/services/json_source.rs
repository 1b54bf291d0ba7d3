//! JSON file record source
//!
//! Reads a whole file holding a top-level JSON array of raw records.

use std::path::{Path, PathBuf};
use serde_json::Value;

use crate::error::{LeadgenError, LeadgenResult, json_type_name};
use crate::traits::RecordSource;
use shared::{Stage, stage_debug};

/// Default input file name
pub const DEFAULT_INPUT_FILE: &str = "input_data.json";

/// Loads raw records from a JSON file on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FILE)
    }
}

impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> LeadgenResult<Vec<Value>> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| LeadgenError::io(&self.path, e))?;

        let root: Value = serde_json::from_str(&content)
            .map_err(|e| LeadgenError::json(&self.path, e))?;

        match root {
            Value::Array(records) => {
                stage_debug!(Stage::Load, "📂 Read {} raw records from {}", records.len(), self.path.display());
                Ok(records)
            }
            other => Err(LeadgenError::NotAnArray { found: json_type_name(&other).to_string() }),
        }
    }
}

/// Load raw records from a JSON file
pub fn load_data(path: impl AsRef<Path>) -> LeadgenResult<Vec<Value>> {
    JsonFileSource::new(path.as_ref()).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_array_elements() {
        let file = write_temp(r#"[{"company": "A"}, {"name": "B"}, 3]"#);
        let records = load_data(file.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["company"], "A");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = JsonFileSource::new(&missing).load().unwrap_err();
        match err {
            LeadgenError::Io { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let file = write_temp(r#"[{"company": "A"#);
        assert!(matches!(load_data(file.path()), Err(LeadgenError::Json { .. })));
    }

    #[test]
    fn test_non_array_root_rejected() {
        let file = write_temp(r#"{"company": "A"}"#);
        match load_data(file.path()) {
            Err(LeadgenError::NotAnArray { found }) => assert_eq!(found, "object"),
            other => panic!("expected NotAnArray, got {other:?}"),
        }
    }

    #[test]
    fn test_describe_and_default() {
        assert_eq!(JsonFileSource::default().describe(), DEFAULT_INPUT_FILE);
    }
}
