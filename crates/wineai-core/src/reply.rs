//! Post-processing of the model's reply.
//!
//! The persona is asked to end every recommendation with a line like
//! `Image Search Suggestion: Whispering Angel Rosé Bottle`. That line is a
//! best-effort convention of free-text output, so extraction never fails:
//! anything that does not fit simply stays in the display text.

use serde::{Deserialize, Serialize};

use crate::persona::IMAGE_SUGGESTION_MARKER;

/// A reply split into what is shown and the optional image hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub display_text: String,
    pub suggested_image_query: Option<String>,
}

impl AssistantReply {
    /// A reply with no suggestion (used for substituted apology turns).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            display_text: text.into(),
            suggested_image_query: None,
        }
    }

    /// The suggestion, if present and non-empty.
    pub fn image_query(&self) -> Option<&str> {
        self.suggested_image_query
            .as_deref()
            .filter(|query| !query.is_empty())
    }
}

/// Splits a raw completion into display text and image-search suggestion.
///
/// Only the last line is inspected. When it contains the marker, the text
/// after the marker (up to any repeated marker) becomes the suggestion and the
/// remaining lines become the display text.
pub fn split_reply(raw: &str) -> AssistantReply {
    let lines: Vec<&str> = raw.split('\n').collect();

    let Some((last, preceding)) = lines.split_last() else {
        return AssistantReply::plain(raw);
    };

    match last.split(IMAGE_SUGGESTION_MARKER).nth(1) {
        Some(term) => AssistantReply {
            display_text: preceding.join("\n").trim().to_string(),
            suggested_image_query: Some(term.trim().to_string()),
        },
        None => AssistantReply::plain(raw),
    }
}
