//! Secret management service trait.
//!
//! Defines the interface for loading the provider API key.

use std::fmt;

use crate::config::SecretConfig;

/// Where a resolved API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    SecretFile,
    Environment,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::SecretFile => write!(f, "secret.json"),
            CredentialSource::Environment => write!(f, "environment"),
        }
    }
}

/// A resolved provider credential.
///
/// `Debug` is implemented by hand so the key never reaches a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub api_key: String,
    pub model_name: Option<String>,
    pub source: CredentialSource,
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("source", &self.source)
            .finish()
    }
}

/// Service for managing secret configuration.
///
/// Implementations must never include key material in error messages.
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration.
    async fn load_secrets(&self) -> Result<SecretConfig, String>;

    /// Checks if the secret file exists.
    async fn secret_file_exists(&self) -> bool;
}
