//! Shared data models for the Reelcraft backend.
//!
//! This crate provides Serde-serializable types for:
//! - Scene plans produced by the scene planner
//! - Rendered scenes and the assembled video result
//! - Single-shot content generation requests/responses

pub mod content;
pub mod scene;
pub mod video;

// Re-export common types
pub use content::{CodeParams, ContentRequest, ContentResponse, ImageParams, TextParams};
pub use scene::{ScenePlan, ScenePlanDocument};
pub use video::{RenderedScene, VideoRequest, VideoResult};
