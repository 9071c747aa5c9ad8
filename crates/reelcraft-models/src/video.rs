//! Video generation request/response models.
//!
//! The client does not receive an encoded video file. It receives ordered
//! still-image scenes, one narration audio track (base64), and a duration
//! schedule, and simulates playback by time-syncing the images against the
//! audio.

use serde::{Deserialize, Serialize};

/// Request body for video generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRequest {
    /// Raw narration script to turn into a slideshow video
    pub script: String,
}

/// A scene that survived image generation, ready for playback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedScene {
    /// Text spoken while this scene is on screen
    pub narration: String,

    /// Locator of the generated still image (always present post-filter)
    pub image_url: String,

    /// How long this scene stays on screen, in milliseconds
    pub duration: f64,
}

/// The assembled video payload returned to the caller.
///
/// Invariants: `scenes` is non-empty, scene order matches the original plan
/// order, and the per-scene durations sum to `total_duration` up to
/// floating-point rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    /// Surviving scenes in plan order
    pub scenes: Vec<RenderedScene>,

    /// Narration audio track, base64-encoded for JSON transport
    pub audio_base64: String,

    /// MIME type of the decoded audio bytes
    pub audio_type: String,

    /// Estimated playback length in milliseconds
    pub total_duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_scene_serializes_wire_names() {
        let scene = RenderedScene {
            narration: "Hello.".to_string(),
            image_url: "https://img.example/1.png".to_string(),
            duration: 4000.0,
        };
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["imageUrl"], "https://img.example/1.png");
        assert_eq!(json["duration"], 4000.0);
    }

    #[test]
    fn video_result_serializes_wire_names() {
        let result = VideoResult {
            scenes: vec![],
            audio_base64: "QUJD".to_string(),
            audio_type: "audio/mpeg".to_string(),
            total_duration: 12000.0,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["audioBase64"], "QUJD");
        assert_eq!(json["audioType"], "audio/mpeg");
        assert_eq!(json["totalDuration"], 12000.0);
    }
}
