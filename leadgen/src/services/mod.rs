//! Service implementations
//!
//! Real implementations of the I/O traits: JSON input and CSV output.

pub mod csv_sink;
pub mod json_source;

pub use csv_sink::{CsvFileSink, DEFAULT_OUTPUT_FILE, export_to_csv, render_csv};
pub use json_source::{DEFAULT_INPUT_FILE, JsonFileSource, load_data};
