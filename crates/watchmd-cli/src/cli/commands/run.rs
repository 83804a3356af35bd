//! `watchmd run` – rewrite the watch list into its parsed sibling.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use watchmd_core::config::WatchConfig;
use watchmd_core::transform::{self, PageTitles};

pub fn run_watchlist(
    cfg: &WatchConfig,
    input: Option<&Path>,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let (input, output) = cfg
        .resolve_paths(input, output)
        .context("resolving watch-list paths")?;
    let mut titles = PageTitles::new(cfg.fetch_options());

    let summary = if quiet {
        transform::run_files(&input, &output, &mut io::sink(), &mut titles)?
    } else {
        let mut stdout = io::stdout().lock();
        transform::run_files(&input, &output, &mut stdout, &mut titles)?
    };

    if !quiet {
        eprintln!(
            "Wrote {} lines to {} ({} links titled)",
            summary.lines(),
            output.display(),
            summary.tasks
        );
    }
    Ok(())
}
