//! Plain-text and JSON rendering of an [`AnalysisResult`].
//!
//! Every call renders the full result from scratch; nothing carries over
//! between calls.

use anyhow::Result;

use crate::aggregate::{AnalysisResult, MAX_SCORE};

/// Bar width used by `AnalysisResult`'s `Display` impl.
pub const DEFAULT_BAR_WIDTH: usize = 20;

const FILLED: char = '#';
const EMPTY: char = '-';

/// Score as shown to the user, e.g. `"75/100"`.
pub fn score_label(score: u8) -> String {
    format!("{score}/{MAX_SCORE}")
}

/// Number of filled cells for `score` on a bar `width` cells wide, rounded.
pub fn filled_cells(score: u8, width: usize) -> usize {
    let score = usize::from(score.min(MAX_SCORE));
    // Split width so neither product can overflow.
    width / 100 * score + (width % 100 * score + 50) / 100
}

/// Proportional fill indicator `width` cells wide.
pub fn fill_bar(score: u8, width: usize) -> String {
    let filled = filled_cells(score, width);
    let mut bar = String::with_capacity(width);
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    for item in items {
        out.push_str("  - ");
        out.push_str(item);
        out.push('\n');
    }
}

/// Multi-line text rendering: score line, then findings and tips.
pub fn render_text(result: &AnalysisResult, bar_width: usize) -> String {
    let mut out = format!(
        "Risk score: {} [{}]\n",
        score_label(result.score),
        fill_bar(result.score, bar_width)
    );
    push_list(&mut out, "Findings:", &result.findings);
    push_list(&mut out, "Tips:", &result.tips);
    out
}

/// Single-line JSON rendering.
pub fn render_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}
