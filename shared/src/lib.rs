//! Shared types for the lead normalization and scoring pipeline
//!
//! Holds the record schema every stage agrees on, the shared error type,
//! and the stage-aware tracing setup used by the binary and library alike.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
