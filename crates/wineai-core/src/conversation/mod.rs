//! Conversation domain module.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `ConversationMessage`)
//! - `log`: The per-session, append-only message log (`ConversationLog`)
//! - `composer`: Builds the outbound request from the log and the active filters

mod composer;
mod log;
mod message;

// Re-export public API
pub use composer::compose;
pub use log::ConversationLog;
pub use message::{ConversationMessage, MessageRole};
