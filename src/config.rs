// config.rs - Appearance configuration file support

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::context::SystemNightMode;
use crate::scheme::Scheme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Contents of `appearance.toml`.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct AppearanceConfig {
    /// Pins the scheme outright; acts as an override provider, so activity
    /// forcing and the system bit are never consulted.
    pub scheme: Option<Scheme>,
    /// Seeds the system night-mode bit for hosts without a live OS probe.
    pub night_mode: Option<SystemNightMode>,
}

impl AppearanceConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

pub fn config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("appearance")
}

pub fn find_config_file() -> Option<PathBuf> {
    let paths = vec![
        config_dir().join("appearance.toml"),
        dirs::home_dir()?.join(".appearance.toml"),
    ];

    paths.into_iter().find(|p| p.exists())
}
