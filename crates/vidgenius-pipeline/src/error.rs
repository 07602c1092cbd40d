//! Pipeline error types.

use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Single user-facing message for every post-precondition failure.
///
/// Transport, authorization, empty-response and decode failures are
/// deliberately indistinguishable to the end user; logs keep them apart.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process content. Please check your API key \
     and try again. If using a large video, it may have exceeded the limit.";

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input precondition violated; the pipeline was never invoked.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Another analysis is already in flight.
    #[error("An analysis is already in progress")]
    Busy,

    #[error("Analysis failed: {0}")]
    Gemini(#[from] vidgenius_gemini::GeminiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The message shown to the triggering surface.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::Busy => self.to_string(),
            Self::Gemini(_) | Self::Io(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
