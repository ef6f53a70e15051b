use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const APP_NAME: &str = "github-issues";
pub const GITHUB_API_BASE: &str = "https://api.github.com/";
pub const DEFAULT_USER_AGENT: &str = "github-issues-rs/1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const API_URL_ENV: &str = "GITHUB_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: Url,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_api_base() -> Url {
    Url::parse(GITHUB_API_BASE).expect("GITHUB_API_BASE is a valid URL")
}

impl Config {
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join("config.toml")
    }

    /// Loads the user config file, falling back to defaults when it does not exist.
    /// `GITHUB_API_URL` overrides whatever base URL the file names.
    pub fn load() -> Result<Self> {
        let path = Self::path();
        let config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.with_env_overrides()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    pub fn with_env_overrides(self) -> Result<Self> {
        match env::var(API_URL_ENV) {
            Ok(raw) => self.with_api_base(&raw),
            Err(_) => Ok(self),
        }
    }

    pub fn with_api_base(mut self, raw: &str) -> Result<Self> {
        self.api_base = Url::parse(raw).with_context(|| format!("Invalid API base URL: {raw}"))?;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
