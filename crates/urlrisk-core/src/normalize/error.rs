//! Error types for URL normalization.

use thiserror::Error;

/// The candidate string (after scheme injection) could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid URL {candidate:?}: {source}")]
pub struct NormalizeError {
    pub candidate: String,
    #[source]
    pub source: url::ParseError,
}

/// Why an input never reached the detectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Input was empty or whitespace only. A prompt state, not a failure.
    Empty,
    /// Input failed to parse even after the default scheme was added.
    Malformed(NormalizeError),
}
