//! Application state.

use std::sync::Arc;

use reelcraft_gateway::{
    AiGatewayClient, AiGatewayConfig, ImageGeneration, SpeechClient, SpeechConfig,
    SpeechSynthesis, TextGeneration,
};
use reelcraft_pipeline::{PipelineConfig, VideoPipeline};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub pipeline: Arc<VideoPipeline>,
    /// Text capability for the single-shot content proxy
    pub text: Arc<dyn TextGeneration>,
    /// Image capability for the single-shot content proxy
    pub images: Arc<dyn ImageGeneration>,
}

impl AppState {
    /// Create application state with real gateway clients.
    pub fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let gateway = Arc::new(AiGatewayClient::new(AiGatewayConfig::from_env()?));
        let speech = Arc::new(SpeechClient::new(SpeechConfig::from_env()?));

        let text: Arc<dyn TextGeneration> = gateway.clone();
        let images: Arc<dyn ImageGeneration> = gateway;

        let pipeline = Arc::new(VideoPipeline::new(
            text.clone(),
            images.clone(),
            speech,
            PipelineConfig::from_env(),
        ));

        Ok(Self {
            config,
            pipeline,
            text,
            images,
        })
    }

    /// Create application state with injected collaborators (used by tests).
    pub fn with_collaborators(
        config: ApiConfig,
        text: Arc<dyn TextGeneration>,
        images: Arc<dyn ImageGeneration>,
        speech: Arc<dyn SpeechSynthesis>,
        pipeline_config: PipelineConfig,
    ) -> Self {
        let pipeline = Arc::new(VideoPipeline::new(
            text.clone(),
            images.clone(),
            speech,
            pipeline_config,
        ));
        Self {
            config,
            pipeline,
            text,
            images,
        }
    }
}
