//! Configuration types.
//!
//! `SecretConfig` mirrors `secret.json`; `RootConfig` mirrors the optional
//! `config.toml`. Every field of `RootConfig` has a default, so a partial file
//! is valid.

use serde::{Deserialize, Serialize};

use crate::filter::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Root structure of secret.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub openai: Option<OpenAIConfig>,
}

/// OpenAI API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Root structure of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub filters: FilterDefaults,
}

/// The `[generation]` section. Only the model is configurable; temperature
/// and token limit are fixed (see [`GenerationParams`](crate::completion::GenerationParams)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Initial position of the price filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    pub default_price_min: u32,
    pub default_price_max: u32,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            default_price_min: DEFAULT_PRICE_MIN,
            default_price_max: DEFAULT_PRICE_MAX,
        }
    }
}
