use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORE_PATH};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where the credential store keeps its file, relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_STORE_PATH),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::store("store.path cannot be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::store(
                "store.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Resolve the store file against a config directory.
    pub fn resolve(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.path)
    }
}
