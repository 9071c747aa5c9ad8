//! Playback duration estimation.
//!
//! Pure arithmetic, no I/O. The narration audio is never inspected; duration
//! is derived from word count at an assumed reading rate and divided evenly
//! across scenes. Even division is a deliberate simplification: scenes are
//! not weighted by their own narration length.

/// A playback schedule for the assembled slideshow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationEstimate {
    /// Estimated total playback length in milliseconds
    pub total_ms: f64,
    /// Even per-scene share of the total, in milliseconds
    pub per_scene_ms: f64,
}

/// Estimate playback duration from narration word count.
///
/// `total_ms = word_count / words_per_minute * 60000`, where words are
/// whitespace-run separated.
pub fn estimate_duration(
    narration: &str,
    scene_count: usize,
    words_per_minute: u32,
) -> DurationEstimate {
    let word_count = narration.split_whitespace().count();
    let total_ms = (word_count as f64 / f64::from(words_per_minute)) * 60_000.0;
    let per_scene_ms = if scene_count == 0 {
        0.0
    } else {
        total_ms / scene_count as f64
    };

    DurationEstimate {
        total_ms,
        per_scene_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_matches_word_count_at_default_rate() {
        // 300 words at 150 wpm is exactly two minutes.
        let narration = "word ".repeat(300);
        let estimate = estimate_duration(&narration, 4, 150);
        assert_eq!(estimate.total_ms, 120_000.0);
        assert_eq!(estimate.per_scene_ms, 30_000.0);
    }

    #[test]
    fn per_scene_shares_sum_to_total() {
        let narration = "alpha beta gamma delta epsilon zeta eta";
        let estimate = estimate_duration(narration, 3, 150);
        let reassembled = estimate.per_scene_ms * 3.0;
        assert!((reassembled - estimate.total_ms).abs() < 1e-6);
    }

    #[test]
    fn whitespace_runs_count_as_single_separators() {
        let estimate = estimate_duration("one\t two\n\nthree   four", 1, 150);
        // 4 words at 150 wpm.
        assert_eq!(estimate.total_ms, 4.0 / 150.0 * 60_000.0);
    }

    #[test]
    fn reading_rate_is_overridable() {
        let narration = "word ".repeat(75);
        assert_eq!(estimate_duration(&narration, 1, 75).total_ms, 60_000.0);
    }

    #[test]
    fn zero_scenes_yields_zero_share() {
        let estimate = estimate_duration("some words here", 0, 150);
        assert_eq!(estimate.per_scene_ms, 0.0);
    }
}
