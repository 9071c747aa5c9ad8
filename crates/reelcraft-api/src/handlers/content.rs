//! Single-shot content generation handler.
//!
//! A thin request/response proxy: one prompt pair per content type, one
//! collaborator call, one artifact back. No orchestration.

use axum::extract::State;
use axum::Json;
use tracing::info;

use reelcraft_models::{CodeParams, ContentRequest, ContentResponse, ImageParams, TextParams};

use crate::error::ApiResult;
use crate::state::AppState;

const TEXT_SYSTEM_PROMPT: &str = "You are a professional content writer specializing in marketing copy and engaging text. \
Generate compelling, well-structured text that matches the specified tone and audience. \
Keep the output between 150-200 words unless otherwise specified. \
Focus on clarity, impact, and engagement.";

const CODE_SYSTEM_PROMPT: &str = "You are an expert programmer who writes clean, functional, well-documented code. \
Generate concise code snippets that perform the specified task correctly. \
Include helpful comments explaining key parts of the code. \
Follow best practices for the specified programming language.";

fn text_user_prompt(params: &TextParams) -> String {
    format!(
        "Create marketing text with the following specifications:\n\
         Topic: {}\n\
         Tone: {}\n\
         Target Audience: {}\n\
         Goal: {}\n\n\
         Generate a compelling paragraph that achieves the goal while maintaining the specified tone.",
        params.topic, params.tone, params.audience, params.goal
    )
}

fn code_user_prompt(params: &CodeParams) -> String {
    format!(
        "Create a code snippet with these specifications:\n\
         Task: {}\n\
         Language: {}\n\
         Context: {}\n\n\
         Generate clean, functional code that accomplishes the task. Include brief inline comments for clarity.\n\
         Keep the code concise but complete enough to be immediately useful.",
        params.task, params.language, params.context
    )
}

fn image_prompt(params: &ImageParams) -> String {
    format!(
        "Create a {} image of {}. Lighting: {}. Composition: {}.",
        params.style, params.subject, params.lighting, params.composition
    )
}

/// Generate one artifact (text, image locator, or code block).
pub async fn generate_content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> ApiResult<Json<ContentResponse>> {
    match request {
        ContentRequest::Text(params) => {
            info!(topic = %params.topic, "Text generation requested");
            let content = state
                .text
                .complete(TEXT_SYSTEM_PROMPT, &text_user_prompt(&params))
                .await?;
            Ok(Json(ContentResponse::text(content)))
        }
        ContentRequest::Image(params) => {
            info!(subject = %params.subject, "Image generation requested");
            let locator = state.images.generate_image(&image_prompt(&params)).await?;
            Ok(Json(ContentResponse::image(locator)))
        }
        ContentRequest::Code(params) => {
            info!(language = %params.language, "Code generation requested");
            let content = state
                .text
                .complete(CODE_SYSTEM_PROMPT, &code_user_prompt(&params))
                .await?;
            Ok(Json(ContentResponse::text(content)))
        }
    }
}
