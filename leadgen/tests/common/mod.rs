//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers used across the leadgen test suites.

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
#[allow(unused_imports)]
pub use helpers::{PipelineBuilder, TestHelpers};
