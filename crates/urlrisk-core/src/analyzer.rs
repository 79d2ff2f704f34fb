//! Entry point: normalize, run every detector, aggregate.

use once_cell::sync::Lazy;

use crate::aggregate::{aggregate, AnalysisResult};
use crate::detect::{default_detectors, Contribution, DynDetector};
use crate::normalize::{normalize, NormalizedUrl, Rejection};

static DEFAULT_ANALYZER: Lazy<Analyzer> = Lazy::new(Analyzer::new);

/// An ordered detector set. Stateless; safe to share across threads.
pub struct Analyzer {
    detectors: Vec<DynDetector>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer with the standard detector set.
    pub fn new() -> Self {
        Self::with_detectors(default_detectors())
    }

    /// Analyzer with a custom detector set, evaluated in the given order.
    pub fn with_detectors(detectors: Vec<DynDetector>) -> Self {
        Self { detectors }
    }

    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    /// Runs every detector over an already-normalized URL.
    pub fn contributions(&self, url: &NormalizedUrl) -> Vec<Option<Contribution>> {
        self.detectors
            .iter()
            .map(|d| {
                let c = d.evaluate(url);
                if let Some(c) = &c {
                    tracing::debug!(detector = %c.detector, delta = c.delta, "detector fired");
                }
                c
            })
            .collect()
    }

    /// Scores `input`. Never fails: rejected input maps to a fixed result.
    pub fn analyze(&self, input: &str) -> AnalysisResult {
        let url = match normalize(input) {
            Ok(url) => url,
            Err(Rejection::Empty) => {
                tracing::debug!("empty input, returning prompt");
                return Rejection::Empty.into_result();
            }
            Err(Rejection::Malformed(e)) => {
                tracing::warn!("rejecting input as malformed: {}", e);
                return Rejection::Malformed(e).into_result();
            }
        };

        let result = aggregate(self.contributions(&url));
        tracing::info!(
            host = url.host(),
            score = result.score,
            findings = result.findings.len(),
            "analyzed url"
        );
        result
    }
}

/// Scores `input` with the standard detector set.
pub fn analyze(input: &str) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(input)
}
