//! Offline heuristic URL risk scoring.
//!
//! [`analyze`] turns a raw, user-supplied string into an [`AnalysisResult`]:
//! a score in `0..=100` plus findings and tips explaining it. Nothing is
//! fetched or resolved; the verdict is advisory only.

pub mod config;
pub mod logging;

pub mod aggregate;
pub mod analyzer;
pub mod detect;
pub mod normalize;
pub mod reference;
pub mod render;

pub use aggregate::AnalysisResult;
pub use analyzer::{analyze, Analyzer};
