//! Narration synthesis.
//!
//! Surviving scenes' narration is joined into one string and rendered with a
//! single speech request, keeping voice continuity and request count
//! constant regardless of scene count. The audio bytes are base64-encoded
//! because the transport is JSON and cannot carry raw binary.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::info;

use reelcraft_gateway::SpeechSynthesis;

use crate::error::{PipelineError, PipelineResult};

/// Narration audio ready for JSON transport.
#[derive(Debug, Clone)]
pub(crate) struct EncodedAudio {
    pub base64: String,
    pub mime_type: String,
}

/// Join narration segments with single spaces, in order.
pub(crate) fn join_narration<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    segments.collect::<Vec<_>>().join(" ")
}

/// Render the joined narration as one audio track and encode it.
pub(crate) async fn synthesize_narration(
    speech: &dyn SpeechSynthesis,
    narration: &str,
) -> PipelineResult<EncodedAudio> {
    let audio = speech
        .synthesize(narration)
        .await
        .map_err(PipelineError::from_speech_error)?;

    info!(audio_bytes = audio.bytes.len(), "Narration audio generated");

    Ok(EncodedAudio {
        base64: BASE64.encode(&audio.bytes),
        mime_type: audio.mime_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_uses_single_spaces_in_order() {
        let segments = ["First.", "Second.", "Third."];
        assert_eq!(
            join_narration(segments.iter().copied()),
            "First. Second. Third."
        );
    }

    #[test]
    fn join_of_one_segment_is_the_segment() {
        assert_eq!(join_narration(std::iter::once("Only.")), "Only.");
    }
}
