//! CLI command handlers, one per file.

mod run;
mod title;

pub use run::run_watchlist;
pub use title::run_title;
