//! Unified path management for wineai configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/wineai/            # Config directory
//! ├── config.toml              # Application configuration (optional)
//! ├── secret.json              # API keys
//! └── logs/                    # Application logs
//!     └── wineai.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "wineai";

/// Errors that can occur during path resolution.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Home directory could not be determined.
    #[error("Cannot find home directory")]
    HomeDirNotFound,
}

/// Path resolver rooted at the wineai config directory.
///
/// `WineAiPaths::new(None)` resolves `~/.config/wineai` (or the platform
/// equivalent); passing a base directory pins everything under it, which the
/// `--config-dir` flag and the tests use.
#[derive(Debug, Clone)]
pub struct WineAiPaths {
    config_dir: PathBuf,
}

impl WineAiPaths {
    pub fn new(base_path: Option<&Path>) -> Result<Self, PathError> {
        let config_dir = match base_path {
            Some(base) => base.to_path_buf(),
            None => dirs::config_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
                .ok_or(PathError::HomeDirNotFound)?
                .join(APP_DIR_NAME),
        };

        Ok(Self { config_dir })
    }

    /// Returns the wineai configuration directory.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600).
    pub fn secret_file(&self) -> PathBuf {
        self.config_dir.join("secret.json")
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir(&self) -> PathBuf {
        self.config_dir.join("logs")
    }
}
