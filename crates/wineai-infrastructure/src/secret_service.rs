//! Secret service implementation.
//!
//! Reads `secret.json` (cached after the first load) and resolves the
//! provider credential with an environment-variable fallback.

use tokio::sync::RwLock;
use wineai_core::WineError;
use wineai_core::config::SecretConfig;
use wineai_core::secret::{ApiCredentials, CredentialSource, SecretService};

use crate::paths::WineAiPaths;
use crate::storage::SecretStorage;

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL_NAME_ENV: &str = "OPENAI_MODEL_NAME";

/// Service for managing secret configuration.
#[derive(Debug)]
pub struct SecretServiceImpl {
    storage: SecretStorage,
    /// Cached secret config loaded from storage.
    secrets: RwLock<Option<SecretConfig>>,
}

impl SecretServiceImpl {
    pub fn new(paths: &WineAiPaths) -> Self {
        Self {
            storage: SecretStorage::new(paths.secret_file()),
            secrets: RwLock::new(None),
        }
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        if let Some(cached) = self.secrets.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let loaded = self.storage.load().map_err(|e| e.to_string())?;
        tracing::debug!("[Secret] Loaded {}", self.storage.path().display());
        *self.secrets.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    async fn secret_file_exists(&self) -> bool {
        self.storage.exists()
    }
}

/// Resolves the OpenAI credential.
///
/// Priority:
/// 1. `openai.api_key` in secret.json
/// 2. `OPENAI_API_KEY` (with optional `OPENAI_MODEL_NAME`) from `env`
///
/// Blank keys count as missing. `env` is injected so callers can pass
/// `|name| std::env::var(name).ok()`.
///
/// # Errors
///
/// Returns `WineError::Security` when neither source yields a key.
pub async fn resolve_credentials<F>(
    secret_service: &dyn SecretService,
    env: F,
) -> Result<ApiCredentials, WineError>
where
    F: Fn(&str) -> Option<String>,
{
    if secret_service.secret_file_exists().await {
        match secret_service.load_secrets().await {
            Ok(SecretConfig {
                openai: Some(openai),
            }) if !openai.api_key.trim().is_empty() => {
                tracing::info!("[Secret] Using OpenAI key from secret.json");
                return Ok(ApiCredentials {
                    api_key: openai.api_key.trim().to_string(),
                    model_name: openai.model_name.filter(|name| !name.trim().is_empty()),
                    source: CredentialSource::SecretFile,
                });
            }
            Ok(_) => {
                tracing::debug!("[Secret] secret.json has no OpenAI key, trying environment");
            }
            Err(e) => {
                tracing::warn!("[Secret] Failed to read secret.json: {}", e);
            }
        }
    }

    let api_key = env(OPENAI_API_KEY_ENV)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            WineError::security(format!(
                "OpenAI API key not found in secret.json or the {OPENAI_API_KEY_ENV} environment variable"
            ))
        })?;

    tracing::info!("[Secret] Using OpenAI key from environment");
    Ok(ApiCredentials {
        api_key,
        model_name: env(OPENAI_MODEL_NAME_ENV).filter(|name| !name.trim().is_empty()),
        source: CredentialSource::Environment,
    })
}
