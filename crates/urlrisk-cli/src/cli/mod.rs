//! CLI for the urlrisk URL scorer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use urlrisk_core::config::{self, OutputFormat, UrlriskConfig};

use commands::{run_check, run_completions, run_man, run_watch, OutputOptions};

/// Top-level CLI for urlrisk.
#[derive(Debug, Parser)]
#[command(name = "urlrisk")]
#[command(about = "urlrisk: offline heuristic risk score for suspicious links", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/urlrisk/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Score one or more URLs.
    Check {
        /// URLs (or bare domains) to analyze.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print JSON (one object per line) instead of text.
        #[arg(long)]
        json: bool,
        /// Width of the score bar in cells (overrides config).
        #[arg(long, value_name = "N")]
        width: Option<usize>,
    },

    /// Read URLs from stdin, one per line, and score each as it arrives.
    Watch {
        /// Print JSON (one object per line) instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

fn output_options(cfg: &UrlriskConfig, json: bool, width: Option<usize>) -> OutputOptions {
    OutputOptions {
        format: if json { OutputFormat::Json } else { cfg.format },
        bar_width: width.unwrap_or(cfg.bar_width),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { urls, json, width } => {
                run_check(&urls, &output_options(&cfg, json, width), cfg.fail_threshold)?
            }
            CliCommand::Watch { json } => run_watch(&output_options(&cfg, json, None)).await?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
