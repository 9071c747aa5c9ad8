//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use reelcraft_gateway::GatewayError;
use reelcraft_pipeline::PipelineError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Payment required. Please add credits to your workspace.")]
    PaymentRequired,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Pipeline(#[from] PipelineError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Pipeline(err) => match err {
                PipelineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                PipelineError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                PipelineError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
                PipelineError::NoImagesProduced
                | PipelineError::NarrationFailed(_)
                | PipelineError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::RateLimited => Self::RateLimited,
            GatewayError::QuotaExceeded => Self::PaymentRequired,
            other => Self::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't expose internal error details in production
        let error = if status == StatusCode::INTERNAL_SERVER_ERROR
            && std::env::var("ENVIRONMENT").unwrap_or_default() == "production"
        {
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse { error };

        (status, Json(body)).into_response()
    }
}
