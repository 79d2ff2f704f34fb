//! Shared result printing for `check` and `watch`.

use anyhow::Result;
use std::io::Write;
use urlrisk_core::config::OutputFormat;
use urlrisk_core::render;
use urlrisk_core::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub bar_width: usize,
}

/// Formats one result; text output is headed by the input it was computed from.
pub fn format_result(input: &str, result: &AnalysisResult, opts: &OutputOptions) -> Result<String> {
    match opts.format {
        OutputFormat::Json => render::render_json(result),
        OutputFormat::Text => Ok(format!(
            "URL: {}\n{}",
            input.trim(),
            render::render_text(result, opts.bar_width)
        )),
    }
}

/// Writes one result. Text blocks end with a blank line so consecutive results stay apart.
pub fn write_result<W: Write>(
    out: &mut W,
    input: &str,
    result: &AnalysisResult,
    opts: &OutputOptions,
) -> Result<()> {
    writeln!(out, "{}", format_result(input, result, opts)?)?;
    Ok(())
}
