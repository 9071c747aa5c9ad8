//! Axum HTTP API server.
//!
//! This crate provides:
//! - The video generation endpoint backed by the pipeline
//! - The single-shot content generation proxy
//! - Rate limiting, CORS, request IDs, and request logging

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
