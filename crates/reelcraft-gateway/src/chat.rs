//! AI gateway client for text and image generation.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint. Text requests
//! carry a system/user message pair; image requests carry a single user
//! message plus a `modalities` hint and read the locator out of the image
//! attachment on the first choice.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::capability::{ImageGeneration, TextGeneration};
use crate::config::AiGatewayConfig;
use crate::error::{GatewayError, GatewayResult};

/// Client for the AI gateway.
pub struct AiGatewayClient {
    config: AiGatewayConfig,
    client: Client,
}

/// Chat-completion request.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modalities: Option<&'a [&'a str]>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat-completion response.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    images: Option<Vec<ImageAttachment>>,
}

#[derive(Debug, Deserialize)]
struct ImageAttachment {
    image_url: ImageUrl,
}

#[derive(Debug, Deserialize)]
struct ImageUrl {
    url: String,
}

impl AiGatewayClient {
    /// Create a new gateway client.
    pub fn new(config: AiGatewayConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Issue one chat-completion request and return the parsed response.
    async fn send(&self, request: &ChatRequest<'_>) -> GatewayResult<ChatResponse> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), model = request.model, "AI gateway error");
            return Err(GatewayError::from_status(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TextGeneration for AiGatewayClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> GatewayResult<String> {
        let request = ChatRequest {
            model: &self.config.text_model,
            messages: vec![
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: user_prompt },
            ],
            temperature: Some(0.7),
            modalities: None,
        };

        let response = self.send(&request).await?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(GatewayError::MissingContent)
    }
}

#[async_trait]
impl ImageGeneration for AiGatewayClient {
    async fn generate_image(&self, prompt: &str) -> GatewayResult<String> {
        let request = ChatRequest {
            model: &self.config.image_model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            temperature: None,
            modalities: Some(&["image", "text"]),
        };

        let response = self.send(&request).await?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.images)
            .and_then(|images| images.into_iter().next())
            .map(|image| image.image_url.url)
            .ok_or(GatewayError::MissingImage)
    }
}
