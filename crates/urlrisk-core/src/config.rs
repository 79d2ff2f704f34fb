use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/urlrisk/config.toml`.
///
/// Only presentation and exit behavior live here; scoring is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlriskConfig {
    /// Output format: "text" (default) or "json".
    #[serde(default)]
    pub format: OutputFormat,
    /// Width of the text fill bar in cells.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    /// If set, `check` exits non-zero when any URL scores at or above this value.
    #[serde(default)]
    pub fail_threshold: Option<u8>,
}

fn default_bar_width() -> usize {
    20
}

impl Default for UrlriskConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            bar_width: default_bar_width(),
            fail_threshold: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlrisk")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, creating it with defaults if missing.
pub fn load_from(path: &Path) -> Result<UrlriskConfig> {
    if !path.exists() {
        let default_cfg = UrlriskConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlriskConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlriskConfig> {
    load_from(&config_path()?)
}
