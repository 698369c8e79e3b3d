pub mod highlight_config;
pub mod storage_config;
pub mod web_ui_config;

use crate::config::highlight_config::HighlightConfig;
use crate::config::storage_config::StorageConfig;
use crate::config::web_ui_config::WebUIConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Main configuration structure matching config.yaml format
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub web_ui: WebUIConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).with_context(|| "Failed to parse YAML config file")
    }

    /// Load the given file, or `config.yaml` if present, or defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new("config.yaml");
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    info!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}
