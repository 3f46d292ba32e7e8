use serde::{Deserialize, Serialize};

use super::message::{ConversationMessage, MessageRole};
use crate::persona::{SYSTEM_PROMPT, WELCOME_MESSAGE};

/// Ordered, append-only log of a single chat session.
///
/// Once initialized the log always starts with the persona instruction
/// (system role) followed by the welcome message. Entries are never removed
/// or rewritten; prompt decoration happens on a copy (see
/// [`compose`](super::compose)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationLog {
    messages: Vec<ConversationMessage>,
}

impl ConversationLog {
    /// Creates an empty, uninitialized log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the log with the system prompt and the welcome message.
    ///
    /// Does nothing if the log already has entries, so it is safe to call at
    /// the start of every interaction.
    pub fn initialize(&mut self) {
        if !self.messages.is_empty() {
            return;
        }

        self.messages
            .push(ConversationMessage::new(MessageRole::System, SYSTEM_PROMPT));
        self.messages.push(ConversationMessage::new(
            MessageRole::Assistant,
            WELCOME_MESSAGE,
        ));
    }

    /// Appends a user message.
    ///
    /// Returns `false` and leaves the log untouched when `text` is blank.
    pub fn append_user(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.messages
            .push(ConversationMessage::new(MessageRole::User, text));
        true
    }

    /// Appends an assistant message.
    pub fn append_assistant(&mut self, text: &str) {
        self.messages
            .push(ConversationMessage::new(MessageRole::Assistant, text));
    }

    /// Returns the displayable history (every entry except system messages).
    pub fn history(&self) -> Vec<&ConversationMessage> {
        self.messages
            .iter()
            .filter(|message| message.role != MessageRole::System)
            .collect()
    }

    /// Returns the full log, system prompt included.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
