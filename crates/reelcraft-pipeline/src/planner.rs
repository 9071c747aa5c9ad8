//! Scene planner.
//!
//! Breaks a narration script into (narration, image prompt) pairs with one
//! text-generation call under a strict JSON contract. Models sometimes wrap
//! the JSON in a markdown code fence, so fences are stripped before parsing.
//! Parse and structure failures never abort the pipeline: the planner
//! degrades to a single-scene plan built from the script itself.

use std::sync::Arc;

use tracing::warn;

use reelcraft_gateway::{GatewayError, TextGeneration};
use reelcraft_models::{ScenePlan, ScenePlanDocument};

use crate::error::PipelineResult;

/// System instruction constraining the model to the scene-plan contract.
const SCENE_PLANNER_SYSTEM_PROMPT: &str = r#"You are a video scene planner. Given a script, break it into 3-5 visual scenes.
For each scene, provide:
1. A short segment of text for narration (2-3 sentences max)
2. A detailed image prompt that captures the visual for that scene

Respond in this exact JSON format:
{
  "scenes": [
    {
      "narration": "Text to be spoken for this scene",
      "imagePrompt": "Detailed visual description for AI image generation"
    }
  ]
}
Only output valid JSON, no markdown or explanation."#;

/// Fallback plan truncation limits.
const FALLBACK_NARRATION_CHARS: usize = 500;
const FALLBACK_PROMPT_CHARS: usize = 200;

/// Outcome of scene planning.
///
/// The fallback path is an internal diagnostic, never a user-visible error:
/// callers proceed with the plans either way, but tests can assert which
/// path was taken.
#[derive(Debug, Clone)]
pub enum PlanOutcome {
    /// The model's plan parsed and validated
    Parsed(Vec<ScenePlan>),
    /// Parsing or validation failed; a single-scene plan was substituted
    Fallback { plans: Vec<ScenePlan>, reason: String },
}

/// Plans scenes for a script via the text-generation capability.
pub struct ScenePlanner {
    text: Arc<dyn TextGeneration>,
}

impl ScenePlanner {
    /// Create a new scene planner.
    pub fn new(text: Arc<dyn TextGeneration>) -> Self {
        Self { text }
    }

    /// Plan scenes for a non-empty script.
    ///
    /// Transport and upstream-status failures from the text capability
    /// propagate; parse/structure failures degrade to the fallback. A 2xx
    /// response with no content counts as empty text, so it fails parsing
    /// and falls back like any other malformed reply.
    pub async fn plan(&self, script: &str) -> PipelineResult<PlanOutcome> {
        let raw = match self.text.complete(SCENE_PLANNER_SYSTEM_PROMPT, script).await {
            Ok(raw) => raw,
            Err(GatewayError::MissingContent) => String::new(),
            Err(err) => return Err(err.into()),
        };

        match parse_scene_document(&raw) {
            Ok(plans) => Ok(PlanOutcome::Parsed(plans)),
            Err(reason) => {
                warn!(reason = %reason, "Scene plan parsing failed, using fallback plan");
                Ok(PlanOutcome::Fallback {
                    plans: vec![fallback_plan(script)],
                    reason,
                })
            }
        }
    }
}

/// Parse and validate the planner model's output.
///
/// Structure is validated, not just JSON syntax: a missing `scenes` key or
/// an empty scene list counts as a failure.
fn parse_scene_document(raw: &str) -> Result<Vec<ScenePlan>, String> {
    let cleaned = strip_code_fences(raw);
    let document: ScenePlanDocument =
        serde_json::from_str(cleaned).map_err(|e| format!("invalid scene JSON: {e}"))?;

    if document.scenes.is_empty() {
        return Err("planner returned zero scenes".to_string());
    }
    Ok(document.scenes)
}

/// Strip a surrounding markdown code fence, a known model response shape.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Single-scene plan built from the script itself.
fn fallback_plan(script: &str) -> ScenePlan {
    ScenePlan::new(
        truncate_chars(script, FALLBACK_NARRATION_CHARS),
        format!(
            "A professional, cinematic scene representing: {}",
            truncate_chars(script, FALLBACK_PROMPT_CHARS)
        ),
    )
}

/// Truncate to at most `max` characters without splitting a char boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
