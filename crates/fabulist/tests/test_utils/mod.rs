//! Test utilities for the Fabulist facade.

use async_trait::async_trait;
use fabulist::{
    FabulistDriver, FabulistResult, GeneratedImage, ImageGeneration, ImageRequest, StoryPipeline,
    StoryRequest, TextGeneration,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A two-picture story about the sea.
pub fn sea_story_json() -> String {
    serde_json::json!({
        "title": "Pip & the <Big> Wave",
        "story_text": "Pip the puffin lived by the sea.\n[IMAGE_1]\nOne day a big wave came.\nPip surfed it all the way home!\n[IMAGE_2]",
        "moral": "Try new things, even \"scary\" ones.",
        "image_summaries": ["a puffin on a rock", "a puffin surfing a wave"]
    })
    .to_string()
}

/// Writer that replays scripted replies in order, after a delay.
pub struct ScriptedWriter {
    replies: Mutex<Vec<Option<String>>>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedWriter {
    /// Replies are consumed front to back; the last one repeats.
    pub fn new(replies: Vec<Option<String>>, delay_ms: u64) -> Self {
        Self {
            replies: Mutex::new(replies),
            delay: Duration::from_millis(delay_ms),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FabulistDriver for ScriptedWriter {
    fn provider_name(&self) -> &'static str {
        "scripted-writer"
    }
}

#[async_trait]
impl TextGeneration for ScriptedWriter {
    async fn generate_story_text(&self, _req: &StoryRequest) -> FabulistResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies.first().cloned().flatten()
        };
        Ok(reply)
    }
}

/// Illustrator that answers every prompt with one tiny image.
pub struct EchoIllustrator;

impl FabulistDriver for EchoIllustrator {
    fn provider_name(&self) -> &'static str {
        "echo-illustrator"
    }
}

#[async_trait]
impl ImageGeneration for EchoIllustrator {
    async fn generate_images(&self, req: &ImageRequest) -> FabulistResult<Vec<GeneratedImage>> {
        Ok(vec![GeneratedImage::new(&req.mime_type, "QUJD")])
    }
}

/// Pipeline over a scripted writer and the echo illustrator.
pub fn pipeline(writer: Arc<ScriptedWriter>) -> StoryPipeline {
    StoryPipeline::new(writer, Arc::new(EchoIllustrator))
}
