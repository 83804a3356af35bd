//! `watchmd title <url>` – print the cleaned title of one page.

use anyhow::Result;
use watchmd_core::config::WatchConfig;
use watchmd_core::transform::{PageTitles, TitleSource};

pub fn run_title(cfg: &WatchConfig, url: &str) -> Result<()> {
    let mut titles = PageTitles::new(cfg.fetch_options());
    let title = titles.title(url.trim())?;
    println!("{}", title);
    Ok(())
}
