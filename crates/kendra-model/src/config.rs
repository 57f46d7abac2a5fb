//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{ModelError, ModelResult};

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Defaults applied to list and query requests
    #[serde(default)]
    pub paging: PagingConfig,
}

/// Paging defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Page size for list operations; clamped to each operation's maximum
    #[serde(default = "default_max_results")]
    pub default_max_results: u32,

    /// Page size for queries
    #[serde(default = "default_query_page_size")]
    pub query_page_size: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_max_results: default_max_results(),
            query_page_size: default_query_page_size(),
        }
    }
}

impl PagingConfig {
    /// Page size for an operation accepting at most `max`
    pub fn max_results_for(&self, max: u32) -> u32 {
        self.default_max_results.clamp(1, max)
    }
}

fn default_max_results() -> u32 {
    100
}

fn default_query_page_size() -> u32 {
    10
}

impl ModelConfig {
    /// Load configuration from file and environment
    /// Priority: environment variables > config.toml > defaults
    pub fn load() -> ModelResult<Self> {
        let mut config = Self::default();

        let toml_path = Self::config_path();
        if toml_path.exists() {
            match Self::from_toml_file(&toml_path) {
                Ok(file_config) => config = file_config,
                Err(e) => log::warn!("Ignoring config file {}: {}", toml_path.display(), e),
            }
        }

        config.apply_env()?;
        Ok(config)
    }

    /// Parse a config.toml file
    pub fn from_toml_file(path: &Path) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ModelResult<Self> {
        toml::from_str(content).map_err(|e| ModelError::Config(e.to_string()))
    }

    /// Override fields from KENDRA_* environment variables
    pub fn apply_env(&mut self) -> ModelResult<()> {
        if let Ok(size) = std::env::var("KENDRA_PAGE_SIZE") {
            let size = size.trim().parse::<u32>().map_err(|e| {
                ModelError::Config(format!("KENDRA_PAGE_SIZE \"{size}\" is not a page size: {e}"))
            })?;
            self.paging.default_max_results = size;
        }
        Ok(())
    }

    /// Get base config directory
    fn config_dir() -> PathBuf {
        if let Ok(root) = std::env::var("KENDRA_MODEL_ROOT") {
            return PathBuf::from(root);
        }

        dirs::home_dir()
            .map(|h| h.join(".kendra"))
            .unwrap_or_else(|| PathBuf::from(".kendra"))
    }

    /// Get config file path (config.toml)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}
