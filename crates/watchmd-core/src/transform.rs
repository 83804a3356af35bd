//! The watch-list pass: classify each line, look up titles for watch URLs,
//! write one output line per input line in order.

use crate::error::WatchError;
use crate::fetch_page::{self, FetchOptions};
use crate::title;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Lines whose trimmed text starts with this are fetched. Strict prefix only.
pub const WATCH_PREFIX: &str = "https://www.youtube.com/watch";

/// Classification of one input line. Borrowed slices are already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Watch(&'a str),
    Text(&'a str),
    Blank,
}

pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.starts_with(WATCH_PREFIX) {
        LineKind::Watch(trimmed)
    } else if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(trimmed)
    }
}

/// One output line. `Display` renders it without the line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Task { title: String, url: String },
    Text(String),
    Blank,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Task { title, url } => write!(f, "- [ ] [{}]({})", title, url),
            Entry::Text(text) => f.write_str(text),
            Entry::Blank => Ok(()),
        }
    }
}

/// Resolves a watch URL to the link text for its task entry.
pub trait TitleSource {
    fn title(&mut self, url: &str) -> Result<String, WatchError>;
}

/// Fetches the page over HTTP and uses its cleaned `<title>`.
#[derive(Debug, Clone, Default)]
pub struct PageTitles {
    opts: FetchOptions,
}

impl PageTitles {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }
}

impl TitleSource for PageTitles {
    fn title(&mut self, url: &str) -> Result<String, WatchError> {
        let body = fetch_page::fetch(url, &self.opts)?;
        let raw = title::extract_title(&body).ok_or_else(|| WatchError::MissingTitle {
            url: url.to_string(),
        })?;
        Ok(title::clean_title(&raw).to_string())
    }
}

/// Transform a single line. Only `Watch` lines touch `titles`.
pub fn transform_line<T>(line: &str, titles: &mut T) -> Result<Entry, WatchError>
where
    T: TitleSource + ?Sized,
{
    Ok(match classify(line) {
        LineKind::Watch(url) => Entry::Task {
            title: titles.title(url)?,
            url: url.to_string(),
        },
        LineKind::Text(text) => Entry::Text(text.to_string()),
        LineKind::Blank => Entry::Blank,
    })
}

/// Counts of entries written by a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub tasks: usize,
    pub texts: usize,
    pub blanks: usize,
}

impl PassSummary {
    pub fn lines(&self) -> usize {
        self.tasks + self.texts + self.blanks
    }

    fn record(&mut self, entry: &Entry) {
        match entry {
            Entry::Task { .. } => self.tasks += 1,
            Entry::Text(_) => self.texts += 1,
            Entry::Blank => self.blanks += 1,
        }
    }
}

/// Runs the pass over `input`, writing entries to `output` and echoing each
/// one to `echo`. Stops at the first error; lines already written stay
/// written. Echo failures are logged and otherwise ignored.
pub fn run_pass<R, W, E, T>(
    input: R,
    output: &mut W,
    echo: &mut E,
    titles: &mut T,
) -> Result<PassSummary, WatchError>
where
    R: BufRead,
    W: Write + ?Sized,
    E: Write + ?Sized,
    T: TitleSource + ?Sized,
{
    let mut summary = PassSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.map_err(|source| WatchError::Read {
            line: idx + 1,
            source,
        })?;
        let entry = transform_line(&line, titles)?;
        if let Entry::Task { title, url } = &entry {
            tracing::info!("line {}: {} -> {:?}", idx + 1, url, title);
        }

        writeln!(output, "{}", entry).map_err(WatchError::Write)?;
        if let Err(e) = writeln!(echo, "{}", entry) {
            tracing::warn!("echo failed: {}", e);
        }
        summary.record(&entry);
    }

    Ok(summary)
}

/// Opens `input` (before touching `output`), truncates `output`, runs the
/// pass and flushes. Both files are closed on every return path.
pub fn run_files<E, T>(
    input: &Path,
    output: &Path,
    echo: &mut E,
    titles: &mut T,
) -> Result<PassSummary, WatchError>
where
    E: Write + ?Sized,
    T: TitleSource + ?Sized,
{
    let source = File::open(input).map_err(|source| WatchError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let dest = File::create(output).map_err(|source| WatchError::OutputOpen {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!("parsing {} -> {}", input.display(), output.display());

    let mut writer = BufWriter::new(dest);
    let summary = run_pass(BufReader::new(source), &mut writer, echo, titles)?;
    writer.flush().map_err(WatchError::Write)?;

    tracing::info!(
        "wrote {} lines ({} tasks, {} text, {} blank)",
        summary.lines(),
        summary.tasks,
        summary.texts,
        summary.blanks
    );
    Ok(summary)
}
