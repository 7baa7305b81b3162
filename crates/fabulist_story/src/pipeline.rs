//! End-to-end story generation: text, validation, then illustration.

use std::sync::Arc;

use fabulist_core::{Category, IllustratedStory, IllustrationSettings, StoryDraft, StorySettings};
use fabulist_error::FabulistResult;
use fabulist_interface::{ImageGeneration, TextGeneration};
use tracing::{info, instrument};

use crate::{build_story_request, illustrate_all, parse_story};

/// Runs one generation cycle against pluggable providers.
///
/// Phases run strictly in order and share no state, so a pipeline can be
/// reused for any number of stories. Any failure discards the partial
/// result.
#[derive(Clone)]
pub struct StoryPipeline {
    text: Arc<dyn TextGeneration>,
    images: Arc<dyn ImageGeneration>,
    story_settings: StorySettings,
    illustration_settings: IllustrationSettings,
}

impl std::fmt::Debug for StoryPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryPipeline")
            .field("text", &self.text.provider_name())
            .field("images", &self.images.provider_name())
            .field("story_settings", &self.story_settings)
            .field("illustration_settings", &self.illustration_settings)
            .finish()
    }
}

impl StoryPipeline {
    /// Create a pipeline with default settings.
    pub fn new(text: Arc<dyn TextGeneration>, images: Arc<dyn ImageGeneration>) -> Self {
        Self {
            text,
            images,
            story_settings: StorySettings::default(),
            illustration_settings: IllustrationSettings::default(),
        }
    }

    /// Override the story text settings.
    pub fn with_story_settings(mut self, settings: StorySettings) -> Self {
        self.story_settings = settings;
        self
    }

    /// Override the illustration settings.
    pub fn with_illustration_settings(mut self, settings: IllustrationSettings) -> Self {
        self.illustration_settings = settings;
        self
    }

    /// Story text settings in use.
    pub fn story_settings(&self) -> &StorySettings {
        &self.story_settings
    }

    /// Illustration settings in use.
    pub fn illustration_settings(&self) -> &IllustrationSettings {
        &self.illustration_settings
    }

    /// Ask the text service for a story and validate its shape.
    #[instrument(skip_all, fields(category = %category))]
    pub async fn write_draft(&self, category: &Category) -> FabulistResult<StoryDraft> {
        let request = build_story_request(category, &self.story_settings);
        let raw = self.text.generate_story_text(&request).await?;
        parse_story(raw.as_deref())
    }

    /// Generate a complete illustrated story for a category.
    ///
    /// # Errors
    ///
    /// Provider errors from the text call, any parse error, and
    /// `ImageGenerationFailed` from the illustration phase.
    #[instrument(skip_all, fields(category = %category))]
    pub async fn generate(&self, category: &Category) -> FabulistResult<IllustratedStory> {
        let draft = self.write_draft(category).await?;
        info!(title = %draft.title, "Story written");

        let urls = illustrate_all(
            self.images.as_ref(),
            &draft.image_summaries,
            &self.illustration_settings,
        )
        .await?;

        Ok(IllustratedStory::from_draft(draft, urls))
    }
}
