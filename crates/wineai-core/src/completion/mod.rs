//! Completion client contract.
//!
//! The core never talks HTTP itself. It hands a [`CompletionRequest`] to a
//! [`CompletionClient`] implementation and branches on the returned
//! `Result`.

mod error;

pub use error::CompletionError;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MODEL, GenerationConfig};

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 300;
use crate::conversation::{ConversationMessage, MessageRole};

/// A role/content pair as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl From<&ConversationMessage> for ChatMessage {
    fn from(message: &ConversationMessage) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

/// Generation parameters for a single completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Always `false`; streaming responses are not consumed.
    pub stream: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        }
    }
}

impl From<&GenerationConfig> for GenerationParams {
    fn from(config: &GenerationConfig) -> Self {
        Self::default().with_model(config.model.clone())
    }
}

impl GenerationParams {
    /// Overrides the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// One outbound call: the composed messages plus generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub params: GenerationParams,
}

/// Stateless call-and-response access to a chat-completion provider.
///
/// Implementations make exactly one attempt per call and return the trimmed
/// text of the first choice.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Short provider name used in logs and error banners (e.g. "OpenAI").
    fn provider_name(&self) -> &str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
