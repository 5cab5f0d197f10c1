//! Optional TOML settings: ~/.eqsolve/config.toml unless `--config` is given.
//!
//! ```toml
//! prompt = "a b c? "
//! format = "json"
//! color = false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::OutputFormat;

pub const DEFAULT_PROMPT: &str = "Nhap he so a, b, c: ";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub prompt: String,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Settings {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing config {}", path.display()))
    }

    /// An explicit path must exist; the default path is used only if present.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(p) = cli_path {
            info!(path = %p.display(), "loading config");
            return Self::from_toml_file(p);
        }
        match default_config_path() {
            Some(p) if p.exists() => {
                info!(path = %p.display(), "loading config");
                Self::from_toml_file(&p)
            }
            _ => {
                debug!("no config file, using built-in settings");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.eqsolve/config.toml (%USERPROFILE%\.eqsolve\config.toml on Windows)
    dirs_next::home_dir().map(|h| h.join(".eqsolve").join("config.toml"))
}
