//! Resolved runtime settings.
//!
//! Values arrive from CLI flags or their environment variables (see
//! `main.rs`), optionally seeded from a `.env` file; this module fills
//! defaults and validates them once so the rest of the program can take
//! them as given.

use anyhow::{Result, anyhow, bail};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::consts::{
    DEFAULT_API_URL, DEFAULT_APP, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_MODEL, ENV_API_KEY,
};

/// Unvalidated input, one field per flag.
#[derive(Debug, Default, Clone)]
pub struct RawSettings {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub app: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub dry_run: bool,
}

#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub app: String,
    pub log_file: PathBuf,
    pub log_level: &'static str,
    pub dry_run: bool,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("app", &self.app)
            .field("log_file", &self.log_file)
            .field("log_level", &self.log_level)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

/// Treat blank values the same as missing ones.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load `KEY=value` pairs from `path` into the process environment without
/// overriding variables that are already set. A missing file is not an
/// error; returns whether one was read.
pub fn load_env_file(path: &Path) -> Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(anyhow!("failed to read {}: {e}", path.display())),
    }
}

pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => bail!("unsupported log level `{other}`; expected trace|debug|info|warn|error"),
    }
}

impl Settings {
    pub fn resolve(raw: RawSettings) -> Result<Self> {
        let Some(api_key) = non_blank(raw.api_key) else {
            bail!("no OpenAI API key found. Set {ENV_API_KEY} or pass --api-key.");
        };

        let log_level = normalize_level(
            non_blank(raw.log_level)
                .as_deref()
                .unwrap_or(DEFAULT_LOG_LEVEL),
        )?;

        Ok(Self {
            api_key,
            model: non_blank(raw.model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url: non_blank(raw.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            app: non_blank(raw.app).unwrap_or_else(|| DEFAULT_APP.to_string()),
            log_file: raw
                .log_file
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            log_level,
            dry_run: raw.dry_run,
        })
    }
}
