//! The sommelier persona.
//!
//! Fixed texts that shape the conversation: the system instruction seeded
//! into every log, the welcome message, and the front-end headings.

mod sommelier;

pub use sommelier::{
    APP_CAPTION, APP_TITLE, IMAGE_SUGGESTION_MARKER, INPUT_PLACEHOLDER, SYSTEM_PROMPT,
    WELCOME_MESSAGE,
};
