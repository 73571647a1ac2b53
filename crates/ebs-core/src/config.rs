use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default API base URL when no config file exists yet.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Global configuration loaded from `~/.config/ebs/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EbsConfig {
    /// Base URL of the store API (scheme + host + port).
    pub base_url: String,
    /// Directory where downloaded files are saved. None = current directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Optional request timeout in seconds. None = transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for EbsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: None,
            timeout_secs: None,
        }
    }
}

impl EbsConfig {
    /// Resolved download directory: the configured one, else the current dir.
    pub fn download_dir(&self) -> Result<PathBuf> {
        match &self.download_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ebs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EbsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EbsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: EbsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
