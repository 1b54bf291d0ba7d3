//! Core pipeline logic: normalization, deduplication and scoring
//!
//! Everything here is pure and synchronous; I/O lives in `services`.

pub mod deduplicator;
pub mod normalizer;
pub mod rubric;
pub mod scorer;

pub use deduplicator::{DedupStats, Deduplicator, remove_duplicates};
pub use normalizer::{Normalizer, is_truthy, normalize_record};
pub use rubric::ScoringRubric;
pub use scorer::{ScoreBreakdown, Scorer, score_lead};
