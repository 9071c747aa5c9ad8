//! Pipeline configuration.

use std::time::Duration;

/// Assumed steady reading rate used for duration estimation.
///
/// This constant governs client playback pacing: the client divides the
/// audio track across scenes using durations derived from it.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 150;

/// Video pipeline tuning knobs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Reading rate used to estimate narration duration
    pub words_per_minute: u32,
    /// Cap on concurrent per-scene image requests
    pub max_concurrent_images: usize,
    /// Bound on each individual image request, so one slow scene cannot
    /// stall the whole batch
    pub image_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            max_concurrent_images: 8,
            image_timeout: Duration::from_secs(60),
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            words_per_minute: std::env::var("PIPELINE_WORDS_PER_MINUTE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.words_per_minute),
            max_concurrent_images: std::env::var("PIPELINE_MAX_CONCURRENT_IMAGES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_concurrent_images),
            image_timeout: Duration::from_secs(
                std::env::var("PIPELINE_IMAGE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.image_timeout.as_secs()),
            ),
        }
    }
}
