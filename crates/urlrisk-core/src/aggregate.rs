//! Sums detector contributions into the final, bounded result.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::detect::Contribution;

pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;

pub const DEFAULT_FINDING: &str = "No obvious red flags.";
pub const DEFAULT_TIP: &str =
    "Verify padlock + domain. Avoid entering credentials from links you didn’t initiate.";

/// Outcome of one analysis, handed to whatever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Risk score in `0..=100`.
    pub score: u8,
    pub findings: Vec<String>,
    pub tips: Vec<String>,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_text(self, crate::render::DEFAULT_BAR_WIDTH))
    }
}

/// Clamps a raw (possibly negative or >100) sum into `0..=100`.
pub fn clamp_score(raw: i64) -> u8 {
    raw.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u8
}

/// Combines detector outputs, in evaluation order, into an [`AnalysisResult`].
///
/// Findings and tips fall back to their defaults independently when empty.
pub fn aggregate<I>(contributions: I) -> AnalysisResult
where
    I: IntoIterator<Item = Option<Contribution>>,
{
    let mut raw: i64 = 0;
    let mut findings = Vec::new();
    let mut tips = Vec::new();

    for c in contributions.into_iter().flatten() {
        raw += i64::from(c.delta);
        findings.push(c.finding);
        tips.push(c.tip);
    }

    if findings.is_empty() {
        findings.push(DEFAULT_FINDING.to_string());
    }
    if tips.is_empty() {
        tips.push(DEFAULT_TIP.to_string());
    }

    AnalysisResult {
        score: clamp_score(raw),
        findings,
        tips,
    }
}
