//! Config file storage.
//!
//! Reads `config.toml` into the `RootConfig` domain model. The file is
//! optional: a missing or blank file means "all defaults".

use std::fs;
use std::path::{Path, PathBuf};

use wineai_core::config::RootConfig;

/// Errors that can occur during config storage operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigStorageError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error in {path}: {source}")]
    TomlParseError {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the config file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(RootConfig))`: File parsed
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<RootConfig>, ConfigStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let config = toml::from_str(&content).map_err(|source| ConfigStorageError::TomlParseError {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(Some(config))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
