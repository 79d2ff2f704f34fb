//! `urlrisk check <url>...` – score URLs given on the command line.

use anyhow::{bail, Result};
use std::io::{self, Write};
use urlrisk_core::analyze;

use super::output::{write_result, OutputOptions};

/// Scores each URL into `out`; fails if the worst score reaches `fail_threshold`.
pub fn check_urls<W: Write>(
    out: &mut W,
    urls: &[String],
    opts: &OutputOptions,
    fail_threshold: Option<u8>,
) -> Result<()> {
    let mut worst = 0u8;
    for url in urls {
        let result = analyze(url);
        worst = worst.max(result.score);
        write_result(out, url, &result, opts)?;
    }

    if let Some(threshold) = fail_threshold {
        if worst >= threshold {
            bail!("risk score {worst} reached fail threshold {threshold}");
        }
    }
    Ok(())
}

pub fn run_check(urls: &[String], opts: &OutputOptions, fail_threshold: Option<u8>) -> Result<()> {
    let stdout = io::stdout();
    check_urls(&mut stdout.lock(), urls, opts, fail_threshold)
}
