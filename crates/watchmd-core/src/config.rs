use crate::error::WatchError;
use crate::fetch_page::FetchOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the watch list inside the default directory.
pub const DEFAULT_INPUT_NAME: &str = "watch.md";

/// Global configuration loaded from `~/.config/watchmd/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Watch list to read. Defaults to `~/Documentos/Wiki/leisure/watch.md`.
    #[serde(default)]
    pub input_path: Option<PathBuf>,
    /// File to overwrite with the result. Defaults to `<input stem>_parsed.<ext>`
    /// next to the input.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// Seconds to wait for the TCP/TLS connection; 0 = no limit.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds for the whole page transfer; 0 = no limit.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional `User-Agent` header (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl WatchConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        let secs = |n: u64| (n > 0).then(|| Duration::from_secs(n));
        FetchOptions {
            connect_timeout: secs(self.connect_timeout_secs),
            timeout: secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Pick input and output paths. Explicit arguments win over config. An
    /// explicit input without an explicit output writes next to that input,
    /// ignoring `output_path`.
    pub fn resolve_paths(
        &self,
        input: Option<&Path>,
        output: Option<&Path>,
    ) -> Result<(PathBuf, PathBuf), WatchError> {
        let input_path = match input.or(self.input_path.as_deref()) {
            Some(p) => p.to_path_buf(),
            None => default_watch_dir()?.join(DEFAULT_INPUT_NAME),
        };
        let fallback_output = if input.is_some() {
            None
        } else {
            self.output_path.as_deref()
        };
        let output_path = match output.or(fallback_output) {
            Some(p) => p.to_path_buf(),
            None => parsed_sibling(&input_path),
        };
        Ok((input_path, output_path))
    }
}

/// `~/Documentos/Wiki/leisure`, where the watch list lives by default.
pub fn default_watch_dir() -> Result<PathBuf, WatchError> {
    let dirs = directories::BaseDirs::new().ok_or(WatchError::HomeDir)?;
    Ok(dirs
        .home_dir()
        .join("Documentos")
        .join("Wiki")
        .join("leisure"))
}

/// `dir/watch.md` -> `dir/watch_parsed.md`; `notes` -> `notes_parsed`.
pub fn parsed_sibling(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{}_parsed.{}", stem, ext.to_string_lossy()),
        None => format!("{}_parsed", stem),
    };
    input.with_file_name(name)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("watchmd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WatchConfig> {
    load_or_init_at(&config_path()?)
}

fn load_or_init_at(path: &Path) -> Result<WatchConfig> {
    if !path.exists() {
        let default_cfg = WatchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: WatchConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
