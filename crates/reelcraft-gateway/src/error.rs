//! Gateway error types.

use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Payment required. Please add credits to your workspace.")]
    QuotaExceeded,

    #[error("Upstream service returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("No content in model response")]
    MissingContent,

    #[error("No image generated")]
    MissingImage,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GatewayError {
    /// Classify a non-success upstream status.
    ///
    /// Rate-limit (429) and quota (402) signals are distinguished so the
    /// pipeline can map them to its own taxonomy; everything else is carried
    /// through with the upstream message.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            429 => Self::RateLimited,
            402 => Self::QuotaExceeded,
            _ => Self::Upstream { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(matches!(
            GatewayError::from_status(429, String::new()),
            GatewayError::RateLimited
        ));
        assert!(matches!(
            GatewayError::from_status(402, String::new()),
            GatewayError::QuotaExceeded
        ));
        assert!(matches!(
            GatewayError::from_status(503, String::new()),
            GatewayError::Upstream { status: 503, .. }
        ));
    }
}
