//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path) and falls back to defaults when the default file does not exist.

mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;

pub use types::{Config, LookupConfig, SearchConfig, UiConfig};

use crate::error::BarcartError;

/// Default config file location: `<config_dir>/barcart/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("barcart").join("config.toml"))
}

/// Load configuration
///
/// An explicit `path` must exist. Without one, the default location is used
/// and a missing file yields `Config::default()`.
pub fn load_config(path: Option<&Path>) -> Result<Config, BarcartError> {
    match path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn read_config(path: &Path) -> Result<Config, BarcartError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| BarcartError::Config(format!("{}: {}", path.display(), e)))?;
    let config = toml::from_str(&contents)
        .map_err(|e| BarcartError::Config(format!("{}: {}", path.display(), e)))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

impl LookupConfig {
    /// Parse the configured endpoint
    pub fn endpoint_url(&self) -> Result<Url, BarcartError> {
        let url = Url::parse(&self.endpoint).map_err(|e| BarcartError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BarcartError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl SearchConfig {
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
