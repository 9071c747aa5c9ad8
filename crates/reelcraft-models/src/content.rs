//! Single-shot content generation models.
//!
//! These back the simple request/response proxy: one structured form
//! submission in, one generated artifact (text, image locator, or code
//! block) out. No orchestration is involved.

use serde::{Deserialize, Serialize};

/// Parameters for marketing-text generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextParams {
    pub topic: String,
    pub tone: String,
    pub audience: String,
    pub goal: String,
}

/// Parameters for single-image generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageParams {
    pub style: String,
    pub subject: String,
    pub lighting: String,
    pub composition: String,
}

/// Parameters for code-snippet generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeParams {
    pub task: String,
    pub language: String,
    pub context: String,
}

/// A single-shot generation request, discriminated by content type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "lowercase")]
pub enum ContentRequest {
    Text(TextParams),
    Image(ImageParams),
    Code(CodeParams),
}

/// A single-shot generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentResponse {
    /// Generated text, code, or image locator
    pub content: String,

    /// Set when `content` is an image locator rather than display text
    #[serde(rename = "isImage", skip_serializing_if = "Option::is_none")]
    pub is_image: Option<bool>,
}

impl ContentResponse {
    /// Response carrying generated text or code.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_image: None,
        }
    }

    /// Response carrying an image locator.
    pub fn image(locator: impl Into<String>) -> Self {
        Self {
            content: locator.into(),
            is_image: Some(true),
        }
    }
}
