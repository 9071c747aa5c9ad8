//! End-to-end pipeline tests with fake collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use reelcraft_gateway::{
    GatewayError, GatewayResult, ImageGeneration, SpeechAudio, SpeechSynthesis, TextGeneration,
};
use reelcraft_pipeline::{PipelineConfig, PipelineError, PlanOutcome, ScenePlanner, VideoPipeline};

const THREE_SCENE_PLAN: &str = r#"{"scenes":[
    {"narration":"Intro.","imagePrompt":"opening-shot"},
    {"narration":"Middle point.","imagePrompt":"drop-middle-shot"},
    {"narration":"Conclusion.","imagePrompt":"closing-shot"}
]}"#;

/// Text capability returning a canned reply (or a canned error).
struct StubText {
    reply: Result<String, fn() -> GatewayError>,
    calls: AtomicUsize,
}

impl StubText {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(err: fn() -> GatewayError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl TextGeneration for StubText {
    async fn complete(&self, _system: &str, _user: &str) -> GatewayResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(err) => Err(err()),
        }
    }
}

/// Image capability that fails prompts containing `drop-`, optionally
/// sleeping first, and records when each call started.
struct StubImages {
    delay: Duration,
    calls: AtomicUsize,
    starts: Mutex<Vec<Instant>>,
}

impl StubImages {
    fn immediate() -> Arc<Self> {
        Self::delayed(Duration::ZERO)
    }

    fn delayed(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            calls: AtomicUsize::new(0),
            starts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ImageGeneration for StubImages {
    async fn generate_image(&self, prompt: &str) -> GatewayResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.starts.lock().unwrap().push(Instant::now());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if prompt.contains("drop-") {
            return Err(GatewayError::MissingImage);
        }
        Ok(format!("https://img.example/{}.png", prompt.len()))
    }
}

/// Speech capability returning fixed bytes and capturing its input.
struct StubSpeech {
    bytes: Vec<u8>,
    error: Option<fn() -> GatewayError>,
    captured: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl StubSpeech {
    fn returning(bytes: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            bytes: bytes.to_vec(),
            error: None,
            captured: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(err: fn() -> GatewayError) -> Arc<Self> {
        Arc::new(Self {
            bytes: Vec::new(),
            error: Some(err),
            captured: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl SpeechSynthesis for StubSpeech {
    async fn synthesize(&self, text: &str) -> GatewayResult<SpeechAudio> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.captured.lock().unwrap().push(text.to_string());
        if let Some(err) = self.error {
            return Err(err());
        }
        Ok(SpeechAudio {
            bytes: self.bytes.clone(),
            mime_type: "audio/mpeg".to_string(),
        })
    }
}

fn pipeline(
    text: Arc<StubText>,
    images: Arc<StubImages>,
    speech: Arc<StubSpeech>,
) -> VideoPipeline {
    VideoPipeline::new(text, images, speech, PipelineConfig::default())
}

#[tokio::test]
async fn whitespace_script_never_reaches_a_collaborator() {
    let text = StubText::replying(THREE_SCENE_PLAN);
    let images = StubImages::immediate();
    let speech = StubSpeech::returning(b"audio");
    let pipeline = pipeline(text.clone(), images.clone(), speech.clone());

    let err = pipeline.generate("   \n\t  ").await.unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));
    assert_eq!(text.calls.load(Ordering::SeqCst), 0);
    assert_eq!(images.calls.load(Ordering::SeqCst), 0);
    assert_eq!(speech.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn dropped_scene_is_pruned_and_excluded_from_narration() {
    let text = StubText::replying(THREE_SCENE_PLAN);
    let images = StubImages::immediate();
    let speech = StubSpeech::returning(&[1, 2, 3]);
    let pipeline = pipeline(text, images, speech.clone());

    let result = pipeline
        .generate("Intro. Middle point. Conclusion.")
        .await
        .unwrap();

    // Scene 2's image failed, so scenes 1 and 3 survive in order.
    assert_eq!(result.scenes.len(), 2);
    assert_eq!(result.scenes[0].narration, "Intro.");
    assert_eq!(result.scenes[1].narration, "Conclusion.");

    // One speech call over the post-filter join.
    let captured = speech.captured.lock().unwrap();
    assert_eq!(captured.as_slice(), ["Intro. Conclusion."]);

    assert_eq!(result.audio_base64, BASE64.encode([1, 2, 3]));
    assert_eq!(result.audio_type, "audio/mpeg");

    // 2 surviving words at 150 wpm, divided across 2 scenes.
    let expected_total = 2.0 / 150.0 * 60_000.0;
    assert_eq!(result.total_duration, expected_total);
    let scene_sum: f64 = result.scenes.iter().map(|s| s.duration).sum();
    assert!((scene_sum - result.total_duration).abs() < 1e-6);
}

#[tokio::test]
async fn all_image_failures_abort_before_speech() {
    let plan = r#"{"scenes":[
        {"narration":"One.","imagePrompt":"drop-a"},
        {"narration":"Two.","imagePrompt":"drop-b"},
        {"narration":"Three.","imagePrompt":"drop-c"}
    ]}"#;
    let speech = StubSpeech::returning(b"audio");
    let pipeline = pipeline(StubText::replying(plan), StubImages::immediate(), speech.clone());

    let err = pipeline.generate("A story.").await.unwrap_err();
    assert!(matches!(err, PipelineError::NoImagesProduced));
    assert_eq!(speech.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fenced_planner_output_is_parsed() {
    let fenced = format!("```json\n{THREE_SCENE_PLAN}\n```");
    let planner = ScenePlanner::new(StubText::replying(&fenced));

    match planner.plan("A script.").await.unwrap() {
        PlanOutcome::Parsed(plans) => assert_eq!(plans.len(), 3),
        PlanOutcome::Fallback { reason, .. } => panic!("unexpected fallback: {reason}"),
    }
}

#[tokio::test]
async fn malformed_planner_output_degrades_to_single_scene_fallback() {
    let planner = ScenePlanner::new(StubText::replying("Sorry, I cannot help with that."));

    match planner.plan("A tale of two harbors.").await.unwrap() {
        PlanOutcome::Fallback { plans, reason } => {
            assert_eq!(plans.len(), 1);
            assert_eq!(plans[0].narration, "A tale of two harbors.");
            assert!(!reason.is_empty());
        }
        PlanOutcome::Parsed(_) => panic!("expected fallback"),
    }
}

#[tokio::test]
async fn empty_model_response_degrades_to_fallback() {
    // A 2xx reply with no content behaves like empty text: it fails JSON
    // parsing and engages the fallback rather than aborting the pipeline.
    let planner = ScenePlanner::new(StubText::failing(|| GatewayError::MissingContent));

    match planner.plan("A tale of two harbors.").await.unwrap() {
        PlanOutcome::Fallback { plans, .. } => {
            assert_eq!(plans.len(), 1);
            assert_eq!(plans[0].narration, "A tale of two harbors.");
        }
        PlanOutcome::Parsed(_) => panic!("expected fallback"),
    }
}

#[tokio::test]
async fn empty_model_response_still_produces_a_video() {
    let pipeline = pipeline(
        StubText::failing(|| GatewayError::MissingContent),
        StubImages::immediate(),
        StubSpeech::returning(b"audio"),
    );

    let result = pipeline.generate("A tale of two harbors.").await.unwrap();
    assert_eq!(result.scenes.len(), 1);
}

#[tokio::test]
async fn fallback_plan_still_produces_a_video() {
    let speech = StubSpeech::returning(b"audio");
    let pipeline = pipeline(
        StubText::replying("not json at all"),
        StubImages::immediate(),
        speech,
    );

    let result = pipeline.generate("A tale of two harbors.").await.unwrap();
    assert_eq!(result.scenes.len(), 1);
    assert_eq!(result.scenes[0].narration, "A tale of two harbors.");
}

#[tokio::test]
async fn planner_rate_limit_propagates_without_fanning_out() {
    let images = StubImages::immediate();
    let pipeline = pipeline(
        StubText::failing(|| GatewayError::RateLimited),
        images.clone(),
        StubSpeech::returning(b"audio"),
    );

    let err = pipeline.generate("A script.").await.unwrap_err();
    assert!(matches!(err, PipelineError::RateLimited));
    assert_eq!(images.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn speech_failure_is_fatal() {
    let pipeline = pipeline(
        StubText::replying(THREE_SCENE_PLAN),
        StubImages::immediate(),
        StubSpeech::failing(|| GatewayError::Upstream {
            status: 500,
            message: "voice unavailable".to_string(),
        }),
    );

    let err = pipeline.generate("A script.").await.unwrap_err();
    assert!(matches!(err, PipelineError::NarrationFailed(_)));
}

#[tokio::test]
async fn speech_quota_exhaustion_keeps_its_classification() {
    let pipeline = pipeline(
        StubText::replying(THREE_SCENE_PLAN),
        StubImages::immediate(),
        StubSpeech::failing(|| GatewayError::QuotaExceeded),
    );

    let err = pipeline.generate("A script.").await.unwrap_err();
    assert!(matches!(err, PipelineError::QuotaExceeded));
}

#[tokio::test]
async fn image_fanout_does_not_serialize_requests() {
    let plan = r#"{"scenes":[
        {"narration":"One.","imagePrompt":"s1"},
        {"narration":"Two.","imagePrompt":"s2"},
        {"narration":"Three.","imagePrompt":"s3"},
        {"narration":"Four.","imagePrompt":"s4"},
        {"narration":"Five.","imagePrompt":"s5"}
    ]}"#;
    let images = StubImages::delayed(Duration::from_millis(200));
    let pipeline = pipeline(
        StubText::replying(plan),
        images.clone(),
        StubSpeech::returning(b"audio"),
    );

    let began = Instant::now();
    let result = pipeline.generate("A five part story.").await.unwrap();
    let elapsed = began.elapsed();

    assert_eq!(result.scenes.len(), 5);

    // All five requests must start within a small shared window; a
    // sequential fanout would spread starts across 4 * 200ms.
    let starts = images.starts.lock().unwrap();
    assert_eq!(starts.len(), 5);
    let first = *starts.iter().min().unwrap();
    let last = *starts.iter().max().unwrap();
    assert!(last.duration_since(first) < Duration::from_millis(150));

    // And the batch finishes in roughly one delay, not five.
    assert!(elapsed < Duration::from_millis(600));
}

#[tokio::test]
async fn slow_image_requests_time_out_and_drop_the_scene() {
    let config = PipelineConfig {
        image_timeout: Duration::from_millis(50),
        ..PipelineConfig::default()
    };
    let images = StubImages::delayed(Duration::from_millis(500));
    let pipeline = VideoPipeline::new(
        StubText::replying(THREE_SCENE_PLAN),
        images,
        StubSpeech::returning(b"audio"),
        config,
    );

    let err = pipeline.generate("A script.").await.unwrap_err();
    assert!(matches!(err, PipelineError::NoImagesProduced));
}

#[tokio::test]
async fn reading_rate_override_drives_duration() {
    let config = PipelineConfig {
        words_per_minute: 60,
        ..PipelineConfig::default()
    };
    let plan = r#"{"scenes":[{"narration":"six words of narration right here","imagePrompt":"only"}]}"#;
    let pipeline = VideoPipeline::new(
        StubText::replying(plan),
        StubImages::immediate(),
        StubSpeech::returning(b"audio"),
        config,
    );

    let result = pipeline.generate("A script.").await.unwrap();
    // 6 words at 60 wpm is six seconds.
    assert!((result.total_duration - 6_000.0).abs() < 1e-6);
}
