//! User configuration management

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::upload::RepoName;

/// Overrides the config file location
pub const CONFIG_ENV: &str = "MD_ISSUES_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,

    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Print JSON instead of a table by default
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Repository used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoName>,

    /// Labels added to every issue
    #[serde(default)]
    pub labels: Vec<String>,
}

pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let dir = dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;
    Ok(dir.join("md-issues").join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }
}
