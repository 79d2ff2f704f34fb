//! `urlrisk watch` – score each stdin line as it arrives.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use urlrisk_core::analyze;

use super::output::{write_result, OutputOptions};

/// Scores every line of `reader` into `out`; returns the number of lines seen.
pub async fn watch_lines<R, W>(reader: R, out: &mut W, opts: &OutputOptions) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    let mut count = 0usize;
    while let Some(line) = lines.next_line().await.context("read stdin")? {
        write_result(out, &line, &analyze(&line), opts)?;
        out.flush()?;
        count += 1;
    }
    Ok(count)
}

pub async fn run_watch(opts: &OutputOptions) -> Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let count = watch_lines(reader, &mut io::stdout(), opts).await?;
    tracing::debug!("watch finished after {} lines", count);
    Ok(())
}
