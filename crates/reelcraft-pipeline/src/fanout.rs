//! Concurrent per-scene image generation.
//!
//! Every planned scene gets its own image request. Requests are issued
//! without waiting on each other (bounded by the configured cap) and results
//! are collected by plan index, so survivor order never depends on
//! completion order. A failed or timed-out request yields `None` for that
//! slot; filtering is the caller's job.

use futures::stream::{self, StreamExt};
use tokio::time::timeout;
use tracing::{debug, warn};

use reelcraft_gateway::ImageGeneration;
use reelcraft_models::ScenePlan;

use crate::config::PipelineConfig;

/// Fixed stylistic directive wrapped around every scene's image prompt.
fn scene_image_prompt(plan: &ScenePlan) -> String {
    format!(
        "Generate a high-quality, cinematic image: {}. Make it visually stunning and professional.",
        plan.image_prompt
    )
}

/// Request one image per plan and return per-slot locators in plan order.
pub(crate) async fn render_scene_images(
    images: &dyn ImageGeneration,
    plans: &[ScenePlan],
    config: &PipelineConfig,
) -> Vec<Option<String>> {
    let prompts: Vec<(usize, String)> = plans
        .iter()
        .map(scene_image_prompt)
        .enumerate()
        .collect();
    stream::iter(prompts)
        .map(|(index, prompt)| {
            async move {
                match timeout(config.image_timeout, images.generate_image(&prompt)).await {
                    Ok(Ok(url)) => {
                        debug!(scene = index, "Scene image generated");
                        Some(url)
                    }
                    Ok(Err(err)) => {
                        warn!(scene = index, error = %err, "Scene image generation failed");
                        None
                    }
                    Err(_) => {
                        warn!(
                            scene = index,
                            timeout_secs = config.image_timeout.as_secs(),
                            "Scene image generation timed out"
                        );
                        None
                    }
                }
            }
        })
        .buffered(config.max_concurrent_images.max(1))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_the_stylistic_directive() {
        let plan = ScenePlan::new("n", "a foggy harbor at sunrise");
        let prompt = scene_image_prompt(&plan);
        assert!(prompt.contains("a foggy harbor at sunrise"));
        assert!(prompt.starts_with("Generate a high-quality, cinematic image:"));
        assert!(prompt.ends_with("Make it visually stunning and professional."));
    }
}
