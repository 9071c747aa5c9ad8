//! Collaborator capability traits.
//!
//! The pipeline depends on these seams rather than on concrete clients, so
//! tests can substitute fakes and the orchestrator never reads ambient
//! process state.

use async_trait::async_trait;

use crate::error::GatewayResult;

/// Text-generation capability (chat-completion style).
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Generate text from a system instruction plus user content.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> GatewayResult<String>;
}

/// Image-generation capability.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    /// Generate one image for the prompt and return its locator
    /// (a URL or data reference).
    async fn generate_image(&self, prompt: &str) -> GatewayResult<String>;
}

/// Raw audio returned by speech synthesis.
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Speech-synthesis capability.
#[async_trait]
pub trait SpeechSynthesis: Send + Sync {
    /// Render the text as one continuous narration track.
    async fn synthesize(&self, text: &str) -> GatewayResult<SpeechAudio>;
}
