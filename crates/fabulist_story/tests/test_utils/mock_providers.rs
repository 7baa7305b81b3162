//! Mock text and image providers for testing.

use async_trait::async_trait;
use fabulist_core::{GeneratedImage, ImageRequest, StoryRequest};
use fabulist_error::{FabulistResult, GeminiError, GeminiErrorKind};
use fabulist_interface::{FabulistDriver, ImageGeneration, TextGeneration};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock story writer returning a fixed reply.
pub struct MockStoryWriter {
    reply: Result<Option<String>, GeminiErrorKind>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<StoryRequest>>>,
}

impl MockStoryWriter {
    /// Always reply with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new(Ok(Some(text.into())))
    }

    /// Reply with no text content at all.
    #[allow(dead_code)]
    pub fn new_empty() -> Self {
        Self::new(Ok(None))
    }

    /// Always fail with the given transport error.
    #[allow(dead_code)]
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new(Err(error))
    }

    fn new(reply: Result<Option<String>, GeminiErrorKind>) -> Self {
        Self {
            reply,
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Number of times the writer was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request received.
    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<StoryRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl FabulistDriver for MockStoryWriter {
    fn provider_name(&self) -> &'static str {
        "mock-writer"
    }
}

#[async_trait]
impl TextGeneration for MockStoryWriter {
    async fn generate_story_text(&self, req: &StoryRequest) -> FabulistResult<Option<String>> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(req.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }
}

/// What a scripted illustration call produces.
#[derive(Debug, Clone)]
pub enum ImageOutcome {
    /// One image whose payload is the given text
    Image(String),
    /// A successful call with zero images
    Empty,
    /// A transport failure
    Error(GeminiErrorKind),
}

/// A scripted reply for prompts mentioning `summary`.
#[derive(Debug, Clone)]
pub struct ScriptedImage {
    pub summary: String,
    pub delay: Duration,
    pub outcome: ImageOutcome,
}

impl ScriptedImage {
    /// An image tagged with the summary, after `delay_ms`.
    pub fn image(summary: &str, delay_ms: u64) -> Self {
        Self {
            summary: summary.to_string(),
            delay: Duration::from_millis(delay_ms),
            outcome: ImageOutcome::Image(format!("IMG:{}", summary)),
        }
    }

    /// A call that yields no images.
    #[allow(dead_code)]
    pub fn empty(summary: &str, delay_ms: u64) -> Self {
        Self {
            outcome: ImageOutcome::Empty,
            ..Self::image(summary, delay_ms)
        }
    }

    /// A call that fails.
    #[allow(dead_code)]
    pub fn error(summary: &str, delay_ms: u64, error: GeminiErrorKind) -> Self {
        Self {
            outcome: ImageOutcome::Error(error),
            ..Self::image(summary, delay_ms)
        }
    }
}

/// Mock illustrator answering from a script keyed by summary text.
///
/// Prompts that match no script entry get an immediate image tagged with
/// the full prompt.
pub struct MockIllustrator {
    script: Vec<ScriptedImage>,
    call_count: Arc<Mutex<usize>>,
    completed: Arc<Mutex<Vec<String>>>,
    requests: Arc<Mutex<Vec<ImageRequest>>>,
}

impl MockIllustrator {
    /// Create an illustrator with a script.
    pub fn new(script: Vec<ScriptedImage>) -> Self {
        Self {
            script,
            call_count: Arc::new(Mutex::new(0)),
            completed: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of illustration calls made.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Summaries in the order their calls finished.
    #[allow(dead_code)]
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    /// Every request received.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl FabulistDriver for MockIllustrator {
    fn provider_name(&self) -> &'static str {
        "mock-illustrator"
    }
}

#[async_trait]
impl ImageGeneration for MockIllustrator {
    async fn generate_images(&self, req: &ImageRequest) -> FabulistResult<Vec<GeneratedImage>> {
        *self.call_count.lock().unwrap() += 1;
        self.requests.lock().unwrap().push(req.clone());

        let Some(entry) = self
            .script
            .iter()
            .find(|entry| req.prompt.contains(&entry.summary))
            .cloned()
        else {
            return Ok(vec![GeneratedImage::new(&req.mime_type, req.prompt.clone())]);
        };

        tokio::time::sleep(entry.delay).await;
        self.completed.lock().unwrap().push(entry.summary.clone());

        match entry.outcome {
            ImageOutcome::Image(data) => Ok(vec![GeneratedImage::new(&req.mime_type, data)]),
            ImageOutcome::Empty => Ok(Vec::new()),
            ImageOutcome::Error(kind) => Err(GeminiError::new(kind).into()),
        }
    }
}
