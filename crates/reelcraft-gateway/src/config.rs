//! Gateway configuration.

/// Configuration for the AI gateway (text + image) client.
#[derive(Debug, Clone)]
pub struct AiGatewayConfig {
    /// Base URL of the OpenAI-compatible gateway
    pub base_url: String,
    /// Bearer token for the gateway
    pub api_key: String,
    /// Model used for text and code generation
    pub text_model: String,
    /// Model used for image generation
    pub image_model: String,
}

impl AiGatewayConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let api_key = std::env::var("AI_GATEWAY_API_KEY")
            .map_err(|_| "AI_GATEWAY_API_KEY is not configured".to_string())?;
        Ok(Self {
            base_url: std::env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| "https://ai.gateway.lovable.dev".to_string()),
            api_key,
            text_model: std::env::var("AI_TEXT_MODEL")
                .unwrap_or_else(|_| "google/gemini-2.5-flash".to_string()),
            image_model: std::env::var("AI_IMAGE_MODEL")
                .unwrap_or_else(|_| "google/gemini-2.5-flash-image-preview".to_string()),
        })
    }
}

/// Configuration for the speech-synthesis client.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Base URL of the speech service
    pub base_url: String,
    /// API key sent in the `xi-api-key` header
    pub api_key: String,
    /// Voice identifier
    pub voice_id: String,
    /// Speech model identifier
    pub model_id: String,
    /// Voice stability parameter
    pub stability: f32,
    /// Voice similarity-boost parameter
    pub similarity_boost: f32,
}

impl SpeechConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let api_key = std::env::var("ELEVENLABS_API_KEY")
            .map_err(|_| "ELEVENLABS_API_KEY is not configured".to_string())?;
        Ok(Self {
            base_url: std::env::var("SPEECH_API_URL")
                .unwrap_or_else(|_| "https://api.elevenlabs.io".to_string()),
            api_key,
            voice_id: std::env::var("SPEECH_VOICE_ID")
                .unwrap_or_else(|_| "EXAVITQu4vr4xnSDxMaL".to_string()),
            model_id: std::env::var("SPEECH_MODEL_ID")
                .unwrap_or_else(|_| "eleven_multilingual_v2".to_string()),
            stability: 0.5,
            similarity_boost: 0.75,
        })
    }
}
