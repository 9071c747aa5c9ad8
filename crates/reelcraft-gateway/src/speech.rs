//! Speech-synthesis client.
//!
//! Posts narration text to an ElevenLabs-style text-to-speech endpoint and
//! returns the raw audio bytes. One request renders one continuous track;
//! callers concatenate text themselves to keep voice continuity.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::warn;

use crate::capability::{SpeechAudio, SpeechSynthesis};
use crate::config::SpeechConfig;
use crate::error::{GatewayError, GatewayResult};

/// MIME type of the audio the speech service returns.
const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// Client for the speech-synthesis service.
pub struct SpeechClient {
    config: SpeechConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

impl SpeechClient {
    /// Create a new speech client.
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl SpeechSynthesis for SpeechClient {
    async fn synthesize(&self, text: &str) -> GatewayResult<SpeechAudio> {
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url, self.config.voice_id
        );

        let request = SpeechRequest {
            text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings {
                stability: self.config.stability,
                similarity_boost: self.config.similarity_boost,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Speech synthesis error");
            return Err(GatewayError::from_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        Ok(SpeechAudio {
            bytes: bytes.to_vec(),
            mime_type: AUDIO_MIME_TYPE.to_string(),
        })
    }
}
