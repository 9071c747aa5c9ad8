//! Pipeline error types.

use reelcraft_gateway::GatewayError;
use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Payment required. Please add credits to your workspace.")]
    QuotaExceeded,

    #[error("Failed to generate any images")]
    NoImagesProduced,

    #[error("Failed to generate audio narration: {0}")]
    NarrationFailed(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl PipelineError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Map a speech-synthesis failure. Rate-limit and quota signals keep
    /// their own classification; anything else becomes a narration failure.
    pub(crate) fn from_speech_error(err: GatewayError) -> Self {
        match err {
            GatewayError::RateLimited => Self::RateLimited,
            GatewayError::QuotaExceeded => Self::QuotaExceeded,
            other => Self::NarrationFailed(other.to_string()),
        }
    }
}

impl From<GatewayError> for PipelineError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::RateLimited => Self::RateLimited,
            GatewayError::QuotaExceeded => Self::QuotaExceeded,
            other => Self::Upstream(other.to_string()),
        }
    }
}
