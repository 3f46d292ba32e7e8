//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` once and caches it.

use tokio::sync::RwLock;
use wineai_core::WineError;
use wineai_core::config::RootConfig;

use crate::paths::WineAiPaths;
use crate::storage::ConfigStorage;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug)]
pub struct ConfigService {
    storage: ConfigStorage,
    config: RwLock<Option<RootConfig>>,
}

impl ConfigService {
    pub fn new(paths: &WineAiPaths) -> Self {
        Self {
            storage: ConfigStorage::new(paths.config_file()),
            config: RwLock::new(None),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub async fn get_config(&self) -> Result<RootConfig, WineError> {
        if let Some(cached) = self.config.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let loaded = match self.storage.load() {
            Ok(Some(config)) => {
                tracing::info!("[Config] Loaded {}", self.storage.path().display());
                config
            }
            Ok(None) => {
                tracing::debug!(
                    "[Config] No config at {}, using defaults",
                    self.storage.path().display()
                );
                RootConfig::default()
            }
            Err(e) => return Err(WineError::config(e.to_string())),
        };

        *self.config.write().await = Some(loaded.clone());
        Ok(loaded)
    }
}
