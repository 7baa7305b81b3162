//! Trait definitions for generative backends and their capabilities.

use async_trait::async_trait;
use fabulist_core::{GeneratedImage, ImageRequest, SpeechRequest, StoryRequest};
use fabulist_error::FabulistResult;

/// Core trait that every generative backend implements.
///
/// Capabilities (text, images, speech) are exposed through the traits below.
pub trait FabulistDriver: Send + Sync {
    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Backends that can write a story as structured JSON text.
#[async_trait]
pub trait TextGeneration: FabulistDriver {
    /// Run a structured-output request.
    ///
    /// Returns `Ok(None)` when the service answered without any text content;
    /// the caller decides whether that is an error.
    async fn generate_story_text(&self, req: &StoryRequest) -> FabulistResult<Option<String>>;
}

/// Backends that can draw illustrations.
#[async_trait]
pub trait ImageGeneration: FabulistDriver {
    /// Generate images for a prompt.
    ///
    /// An empty vector means the service produced nothing for this prompt
    /// (for example, a safety filter dropped every candidate).
    async fn generate_images(&self, req: &ImageRequest) -> FabulistResult<Vec<GeneratedImage>>;
}

/// Backends that can read text aloud.
#[async_trait]
pub trait SpeechSynthesis: FabulistDriver {
    /// Synthesize speech and return the base64-encoded raw PCM payload.
    ///
    /// Returns `Ok(None)` when the response carried no audio data.
    async fn synthesize_speech(&self, req: &SpeechRequest) -> FabulistResult<Option<String>>;
}
