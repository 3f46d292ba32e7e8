//! Secret configuration file storage.
//!
//! Loads `secret.json` from the wineai config directory.

use std::fs;
use std::path::{Path, PathBuf};

use wineai_core::config::SecretConfig;

/// Errors that can occur during secret storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SecretStorageError {
    /// Configuration file not found.
    #[error("Configuration file not found at: {}", .0.display())]
    NotFound(PathBuf),
    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Read-only storage for secret.json.
///
/// Does NOT:
/// - Write or modify secret files
/// - Validate API keys
///
/// # Security Note
///
/// The file is plaintext JSON and should have permissions 600.
#[derive(Debug, Clone)]
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the secret configuration from the JSON file.
    ///
    /// # Returns
    ///
    /// - `Ok(SecretConfig)`: Successfully loaded and parsed
    /// - `Err(SecretStorageError::NotFound)`: File doesn't exist
    /// - `Err(SecretStorageError::IoError)`: Failed to read file
    /// - `Err(SecretStorageError::ParseError)`: Invalid JSON format
    pub fn load(&self) -> Result<SecretConfig, SecretStorageError> {
        if !self.path.exists() {
            return Err(SecretStorageError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
