use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FonbnkError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Fonbnk server error: status={status}, response_body={}", String::from_utf8_lossy(.body))]
    Service { status: u16, body: Vec<u8> },

    #[error("Failed to decode {shape}: {source}")]
    Decode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

impl FonbnkError {
    /// HTTP status of a service error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw upstream body of a service error, decoded lossily for display
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Service { body, .. } => Some(String::from_utf8_lossy(body)),
            _ => None,
        }
    }

    /// Whether a caller may reasonably retry the same request.
    ///
    /// Nothing in this crate retries on its own; this only classifies.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Service { status, .. } => *status >= 500,
            Self::Config(_)
            | Self::Decode { .. }
            | Self::Serialization(_)
            | Self::InvalidParameters(_) => false,
        }
    }
}
