//! Video generation handler.

use axum::extract::State;
use axum::Json;
use tracing::info;

use reelcraft_models::{VideoRequest, VideoResult};

use crate::error::ApiResult;
use crate::state::AppState;

/// Generate a slideshow video from a narration script.
///
/// Runs the full pipeline: scene planning, concurrent image generation,
/// narration synthesis, and duration estimation. Failures map onto transport
/// statuses through the pipeline error taxonomy.
pub async fn generate_video(
    State(state): State<AppState>,
    Json(request): Json<VideoRequest>,
) -> ApiResult<Json<VideoResult>> {
    info!(script_chars = request.script.len(), "Video generation requested");

    let result = state.pipeline.generate(&request.script).await?;

    info!(
        scenes = result.scenes.len(),
        total_duration_ms = result.total_duration,
        "Video generation complete"
    );

    Ok(Json(result))
}
