use super::log::ConversationLog;
use super::message::MessageRole;
use crate::completion::ChatMessage;
use crate::error::{Result, WineError};
use crate::filter::FilterSelection;

/// Builds the message list sent to the completion API.
///
/// The log is copied into wire messages and only the copy of the final
/// (user) message is rewritten to carry the filter context:
///
/// ```text
/// User Preferences: Grape=[...], Region=[...], Price Range=[$min - $max].
///
/// User Mood/Request: <original text>
/// ```
///
/// # Errors
///
/// Returns `WineError::Internal` if the log is empty or does not end with a
/// user message. Callers append the user turn first, so this only fires on a
/// programming error.
pub fn compose(log: &ConversationLog, filters: &FilterSelection) -> Result<Vec<ChatMessage>> {
    let last = log
        .last()
        .ok_or_else(|| WineError::internal("cannot compose a request from an empty log"))?;

    if last.role != MessageRole::User {
        return Err(WineError::internal(format!(
            "last message must be user-authored, found {}",
            last.role.as_str()
        )));
    }

    let mut messages: Vec<ChatMessage> = log.messages().iter().map(ChatMessage::from).collect();

    if let Some(outbound) = messages.last_mut() {
        outbound.content = format!(
            "{}\n\nUser Mood/Request: {}",
            filters.to_context(),
            last.content
        );
    }

    Ok(messages)
}
