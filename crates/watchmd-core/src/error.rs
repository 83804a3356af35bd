//! Error kinds for a watch-list pass. Every variant is fatal to the run.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// No home directory, so the default watch-list location is unknown.
    #[error("could not determine home directory")]
    HomeDir,

    #[error("cannot open input {}", .path.display())]
    InputOpen { path: PathBuf, source: io::Error },

    #[error("cannot open output {}", .path.display())]
    OutputOpen { path: PathBuf, source: io::Error },

    /// Reading input failed (including non-UTF-8 content). `line` is 1-based.
    #[error("failed reading input line {line}")]
    Read { line: usize, source: io::Error },

    #[error("failed writing output")]
    Write(#[source] io::Error),

    /// Transport-level failure reported by curl (resolve, connect, timeout, ...).
    #[error("GET {url} failed")]
    Fetch { url: String, source: curl::Error },

    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },

    #[error("page {url} has no <title> element")]
    MissingTitle { url: String },
}
