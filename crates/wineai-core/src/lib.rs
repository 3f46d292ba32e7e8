pub mod completion;
pub mod config;
pub mod conversation;
pub mod error;
pub mod filter;
pub mod persona;
pub mod quick_prompt;
pub mod reply;
pub mod secret;

// Re-export common error type
pub use error::WineError;
