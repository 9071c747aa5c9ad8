//! Script-to-slideshow video generation pipeline.
//!
//! Turns one narration script into a client-playable result: ordered scenes
//! with generated still images, one base64 audio track, and a duration
//! schedule. Stages run as a linear sequence with no retries:
//!
//! `Validate → Plan → Fanout → Synthesize → Estimate → Assemble`
//!
//! Per-scene image failures are recovered locally by dropping the scene;
//! planning failures degrade to a single-scene fallback. Every other stage
//! is fail-fast, so callers never see a partial result (for example a video
//! missing its audio track).

pub mod config;
pub mod duration;
pub mod error;
pub mod planner;

mod fanout;
mod narration;

use std::sync::Arc;

use tracing::{info, warn};

use reelcraft_gateway::{ImageGeneration, SpeechSynthesis, TextGeneration};
use reelcraft_models::{RenderedScene, ScenePlan, VideoResult};

pub use config::{PipelineConfig, DEFAULT_WORDS_PER_MINUTE};
pub use duration::{estimate_duration, DurationEstimate};
pub use error::{PipelineError, PipelineResult};
pub use planner::{PlanOutcome, ScenePlanner};

/// The video generation pipeline.
///
/// Collaborator clients are injected at construction so business logic never
/// reads ambient process state and tests can substitute fakes.
pub struct VideoPipeline {
    planner: ScenePlanner,
    images: Arc<dyn ImageGeneration>,
    speech: Arc<dyn SpeechSynthesis>,
    config: PipelineConfig,
}

impl VideoPipeline {
    /// Create a pipeline over the three collaborator capabilities.
    pub fn new(
        text: Arc<dyn TextGeneration>,
        images: Arc<dyn ImageGeneration>,
        speech: Arc<dyn SpeechSynthesis>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            planner: ScenePlanner::new(text),
            images,
            speech,
            config,
        }
    }

    /// Generate a slideshow video from a script.
    pub async fn generate(&self, script: &str) -> PipelineResult<VideoResult> {
        let script = script.trim();
        if script.is_empty() {
            return Err(PipelineError::invalid_input("Script is required"));
        }

        info!(script_chars = script.len(), "Starting video generation");

        let plans = match self.planner.plan(script).await? {
            PlanOutcome::Parsed(plans) => {
                info!(scenes = plans.len(), "Scene plan parsed");
                plans
            }
            PlanOutcome::Fallback { plans, reason } => {
                warn!(reason = %reason, "Scene planning degraded to fallback plan");
                plans
            }
        };

        let locators = fanout::render_scene_images(self.images.as_ref(), &plans, &self.config).await;
        let survivors = filter_rendered(plans, locators);
        if survivors.is_empty() {
            return Err(PipelineError::NoImagesProduced);
        }
        info!(scenes = survivors.len(), "Scene images generated");

        // Dropped scenes' narration is excluded: the join happens post-filter.
        let narration =
            narration::join_narration(survivors.iter().map(|(plan, _)| plan.narration.as_str()));
        let audio = narration::synthesize_narration(self.speech.as_ref(), &narration).await?;

        let estimate =
            duration::estimate_duration(&narration, survivors.len(), self.config.words_per_minute);

        let scenes = survivors
            .into_iter()
            .map(|(plan, image_url)| RenderedScene {
                narration: plan.narration,
                image_url,
                duration: estimate.per_scene_ms,
            })
            .collect();

        Ok(VideoResult {
            scenes,
            audio_base64: audio.base64,
            audio_type: audio.mime_type,
            total_duration: estimate.total_ms,
        })
    }
}

/// Pair plans with their image locators and drop imageless scenes,
/// preserving relative order.
fn filter_rendered(
    plans: Vec<ScenePlan>,
    locators: Vec<Option<String>>,
) -> Vec<(ScenePlan, String)> {
    plans
        .into_iter()
        .zip(locators)
        .filter_map(|(plan, locator)| locator.map(|url| (plan, url)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_drops_imageless_scenes_without_reordering() {
        let plans = vec![
            ScenePlan::new("one", "p1"),
            ScenePlan::new("two", "p2"),
            ScenePlan::new("three", "p3"),
        ];
        let locators = vec![Some("u1".to_string()), None, Some("u3".to_string())];

        let survivors = filter_rendered(plans, locators);
        assert_eq!(survivors.len(), 2);
        assert_eq!(survivors[0].0.narration, "one");
        assert_eq!(survivors[1].0.narration, "three");
        assert_eq!(survivors[1].1, "u3");
    }
}
