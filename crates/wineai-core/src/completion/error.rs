use thiserror::Error;

/// Failure of a single completion call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompletionError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("request failed: {message}")]
    Transport { message: String, retryable: bool },

    /// The provider answered with a non-success status.
    #[error("{message} (status {status})")]
    Api {
        status: u16,
        message: String,
        retryable: bool,
    },

    /// The provider answered 2xx but the body was unusable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl CompletionError {
    /// True for failures attributable to the provider or the network, as
    /// opposed to a response we could not make sense of.
    pub fn is_provider_error(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Api { .. })
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { retryable, .. } | Self::Api { retryable, .. } => *retryable,
            Self::InvalidResponse(_) => false,
        }
    }
}
