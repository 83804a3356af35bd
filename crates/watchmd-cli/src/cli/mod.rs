//! CLI for watchmd.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use watchmd_core::config;

use commands::{run_title, run_watchlist};

/// Top-level CLI for watchmd.
#[derive(Debug, Parser)]
#[command(name = "watchmd")]
#[command(about = "watchmd: turn YouTube links in a watch list into markdown tasks", long_about = None)]
pub struct Cli {
    /// Defaults to `run` with configured paths.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite the watch list, replacing watch URLs with `- [ ] [title](url)`.
    Run {
        /// Watch list to read (overrides config).
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// File to overwrite with the result (overrides config).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Do not echo entries to stdout.
        #[arg(long, short)]
        quiet: bool,
    },

    /// Fetch one page and print its cleaned title.
    Title {
        /// Page URL.
        url: String,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Run {
            input: None,
            output: None,
            quiet: false,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or_default() {
            CliCommand::Run {
                input,
                output,
                quiet,
            } => run_watchlist(&cfg, input.as_deref(), output.as_deref(), quiet)?,
            CliCommand::Title { url } => run_title(&cfg, &url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
