//! Sommelier turn handling.
//!
//! One turn = record the user message, compose the outbound request with the
//! current filters, make a single completion call, split the reply, record
//! the assistant message. Provider failures never escape a turn: they are
//! turned into a fixed apology plus an error banner so the conversation can
//! continue.

use std::sync::Arc;

use wineai_core::WineError;
use wineai_core::completion::{CompletionClient, CompletionError, CompletionRequest, GenerationParams};
use wineai_core::conversation::compose;
use wineai_core::filter::FilterSelection;
use wineai_core::reply::{AssistantReply, split_reply};

use crate::session::ChatSession;

pub const PROVIDER_ERROR_REPLY: &str =
    "Sorry, I encountered an error connecting to the wine knowledge base. Please try again.";

pub const UNEXPECTED_ERROR_REPLY: &str = "Apologies, a technical glitch occurred. Please try again.";

/// Why a turn fell back to an apology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnFailure {
    /// The provider or the network failed.
    Provider { provider: String, detail: String },
    /// Anything else (e.g. an unusable response body).
    Unexpected { detail: String },
}

impl TurnFailure {
    fn from_completion_error(provider: &str, err: &CompletionError) -> Self {
        if err.is_provider_error() {
            Self::Provider {
                provider: provider.to_string(),
                detail: err.to_string(),
            }
        } else {
            Self::Unexpected {
                detail: err.to_string(),
            }
        }
    }

    /// Text for the visible error banner.
    pub fn banner(&self) -> String {
        match self {
            Self::Provider { provider, detail } => format!("{provider} API Error: {detail}"),
            Self::Unexpected { detail } => format!("An unexpected error occurred: {detail}"),
        }
    }

    /// The assistant message substituted for the failed reply.
    pub fn fallback_reply(&self) -> &'static str {
        match self {
            Self::Provider { .. } => PROVIDER_ERROR_REPLY,
            Self::Unexpected { .. } => UNEXPECTED_ERROR_REPLY,
        }
    }
}

/// Result of a completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReply {
    /// The user's text as recorded in the log.
    pub user_text: String,
    /// What to show for the assistant turn.
    pub reply: AssistantReply,
    /// Present when `reply` is a substituted apology.
    pub failure: Option<TurnFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing to send (blank input, no preset selected).
    Skipped,
    Replied(TurnReply),
}

/// Handles conversational turns against a completion provider.
pub struct SommelierUseCase {
    client: Arc<dyn CompletionClient>,
    params: GenerationParams,
}

impl SommelierUseCase {
    pub fn new(client: Arc<dyn CompletionClient>, params: GenerationParams) -> Self {
        Self { client, params }
    }

    /// Runs a whole turn.
    ///
    /// Returns `TurnOutcome::Skipped` without touching the log or the client
    /// when there is no usable input.
    ///
    /// # Errors
    ///
    /// Only broken invariants surface as `Err`; provider failures are
    /// reported through [`TurnReply::failure`].
    pub async fn handle_turn(
        &self,
        session: &mut ChatSession,
        filters: &FilterSelection,
        typed_input: Option<&str>,
    ) -> Result<TurnOutcome, WineError> {
        if session.begin_turn(typed_input).is_none() {
            tracing::debug!("[Turn] Blank input, nothing to send");
            return Ok(TurnOutcome::Skipped);
        }

        self.complete_turn(session, filters)
            .await
            .map(TurnOutcome::Replied)
    }

    /// Second half of a turn, after [`ChatSession::begin_turn`] recorded the
    /// user message. Front-ends call the halves separately to render the
    /// user message and a progress indicator in between.
    pub async fn complete_turn(
        &self,
        session: &mut ChatSession,
        filters: &FilterSelection,
    ) -> Result<TurnReply, WineError> {
        let messages = compose(session.log(), filters)?;
        let user_text = session
            .log()
            .last()
            .map(|message| message.content.clone())
            .unwrap_or_default();

        let request = CompletionRequest {
            messages,
            params: self.params.clone(),
        };

        tracing::info!(
            session_id = session.id(),
            model = %self.params.model,
            "[Turn] Requesting recommendation ({})",
            filters.to_context()
        );

        let completion = self.client.complete(&request).await.and_then(|raw| {
            if raw.trim().is_empty() {
                Err(CompletionError::InvalidResponse(
                    "provider returned an empty reply".to_string(),
                ))
            } else {
                Ok(raw)
            }
        });

        let (reply, failure) = match completion {
            Ok(raw) => {
                let reply = split_reply(&raw);
                tracing::info!(
                    session_id = session.id(),
                    has_image_suggestion = reply.image_query().is_some(),
                    "[Turn] Reply received"
                );
                (reply, None)
            }
            Err(err) => {
                let failure = TurnFailure::from_completion_error(self.client.provider_name(), &err);
                tracing::error!(
                    session_id = session.id(),
                    retryable = err.is_retryable(),
                    "[Turn] Completion failed: {}",
                    err
                );
                (AssistantReply::plain(failure.fallback_reply()), Some(failure))
            }
        };

        session.log_mut().append_assistant(&reply.display_text);

        Ok(TurnReply {
            user_text,
            reply,
            failure,
        })
    }
}
