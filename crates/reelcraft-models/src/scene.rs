//! Scene plan models.
//!
//! A scene plan is the pre-image, pre-audio intermediate description of one
//! slideshow scene: the text to narrate plus the prompt used to render its
//! still image.

use serde::{Deserialize, Serialize};

/// One planned scene: narration text plus an image-generation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenePlan {
    /// Text to be spoken over this scene (2-3 sentences)
    pub narration: String,

    /// Visual description handed to the image model
    #[serde(rename = "imagePrompt")]
    pub image_prompt: String,
}

impl ScenePlan {
    /// Create a new scene plan.
    pub fn new(narration: impl Into<String>, image_prompt: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            image_prompt: image_prompt.into(),
        }
    }
}

/// Top-level document the planner model is instructed to emit.
///
/// The planner is asked for 3-5 scenes but the count is a contract with the
/// model, not an invariant: shorter or longer lists must flow through the
/// pipeline unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenePlanDocument {
    pub scenes: Vec<ScenePlan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_plan_uses_camel_case_prompt_key() {
        let plan = ScenePlan::new("A quiet town.", "aerial shot of a small town at dawn");
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["narration"], "A quiet town.");
        assert_eq!(json["imagePrompt"], "aerial shot of a small town at dawn");
    }

    #[test]
    fn plan_document_round_trips_planner_contract() {
        let raw = r#"{"scenes":[{"narration":"One.","imagePrompt":"first"},{"narration":"Two.","imagePrompt":"second"}]}"#;
        let doc: ScenePlanDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.scenes.len(), 2);
        assert_eq!(doc.scenes[0].image_prompt, "first");
    }
}
