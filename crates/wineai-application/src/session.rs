//! Session-scoped chat state.

use uuid::Uuid;
use wineai_core::conversation::{ConversationLog, ConversationMessage};

/// All mutable state of one chat session.
///
/// Created once when the front-end starts a session and dropped when it
/// ends. The turn handler borrows it mutably for the duration of a turn.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: String,
    log: ConversationLog,
    /// One-shot preset chosen by the user; consumed by the next turn.
    selected_prompt: Option<String>,
}

impl ChatSession {
    /// Creates a session whose log is already seeded with the persona and
    /// welcome message.
    pub fn new() -> Self {
        let mut log = ConversationLog::new();
        log.initialize();

        let session = Self {
            id: Uuid::new_v4().to_string(),
            log,
            selected_prompt: None,
        };
        tracing::info!("[Session] Started {}", session.id);
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub(crate) fn log_mut(&mut self) -> &mut ConversationLog {
        &mut self.log
    }

    /// Displayable history (system prompt hidden).
    pub fn history(&self) -> Vec<&ConversationMessage> {
        self.log.history()
    }

    /// Marks a preset prompt to be used for the next turn.
    pub fn select_prompt(&mut self, prompt: impl Into<String>) {
        self.selected_prompt = Some(prompt.into());
    }

    pub fn selected_prompt(&self) -> Option<&str> {
        self.selected_prompt.as_deref()
    }

    /// Starts a turn: picks the input and records it as the user message.
    ///
    /// A selected preset wins over `typed_input` and is cleared. Returns the
    /// recorded text, or `None` when there is nothing non-blank to send (the
    /// log is left untouched in that case).
    pub fn begin_turn(&mut self, typed_input: Option<&str>) -> Option<String> {
        let input = match self.selected_prompt.take() {
            Some(preset) => preset,
            None => typed_input?.to_string(),
        };

        self.log.initialize();
        if !self.log.append_user(&input) {
            return None;
        }
        Some(input)
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wineai_core::conversation::MessageRole;

    #[test]
    fn test_new_session_is_seeded() {
        let session = ChatSession::new();
        assert_eq!(session.log().len(), 2);
        assert_eq!(session.history().len(), 1);
        assert!(!session.id().is_empty());
        assert!(session.selected_prompt().is_none());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(ChatSession::new().id(), ChatSession::new().id());
    }

    #[test]
    fn test_begin_turn_with_typed_input() {
        let mut session = ChatSession::new();
        let text = session.begin_turn(Some("Something for a rainy day"));

        assert_eq!(text.as_deref(), Some("Something for a rainy day"));
        assert_eq!(session.log().last().unwrap().role, MessageRole::User);
    }

    #[test]
    fn test_begin_turn_blank_input_is_noop() {
        let mut session = ChatSession::new();

        assert!(session.begin_turn(Some("  ")).is_none());
        assert!(session.begin_turn(None).is_none());
        assert_eq!(session.log().len(), 2);
    }

    #[test]
    fn test_selected_prompt_wins_and_is_consumed() {
        let mut session = ChatSession::new();
        session.select_prompt("I'm feeling celebratory!");

        let first = session.begin_turn(Some("typed text"));
        assert_eq!(first.as_deref(), Some("I'm feeling celebratory!"));
        assert!(session.selected_prompt().is_none());

        let second = session.begin_turn(Some("typed text"));
        assert_eq!(second.as_deref(), Some("typed text"));
    }
}
