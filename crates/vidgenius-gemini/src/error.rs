//! Gemini client error types.

use thiserror::Error;

pub type GeminiResult<T> = Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gemini API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("No content in Gemini response")]
    EmptyResponse,

    #[error("Failed to decode analysis result: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GeminiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True when the response arrived but could not be turned into a result.
    ///
    /// Callers surface transport and decode failures identically to the
    /// user; this distinction exists for logs only.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
