//! Front-end state for one story view.

use fabulist_core::{Category, IllustratedStory, RenderSegment};
use fabulist_error::{FabulistResult, StoryError, StoryErrorKind};
use fabulist_story::{StoryPipeline, compose_segments, narration_text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, info, instrument};

/// What the story view is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, strum::EnumIs)]
pub enum StoryPhase {
    /// Waiting for a category
    #[default]
    Empty,
    /// A story is being written and illustrated
    Loading,
    /// The last attempt failed with this message
    Failed(String),
    /// A finished story
    Ready(IllustratedStory),
}

/// Drives story generation the way the input form and story view do.
///
/// Only one generation runs at a time; a second submit while one is in
/// flight is rejected rather than queued.
#[derive(Debug)]
pub struct StoryApp {
    pipeline: StoryPipeline,
    phase: Mutex<StoryPhase>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path, including cancellation.
struct InFlight<'a> {
    app: &'a StoryApp,
}

impl<'a> InFlight<'a> {
    fn acquire(app: &'a StoryApp) -> Option<Self> {
        app.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { app })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut phase = self.app.lock_phase();
        if phase.is_loading() {
            *phase = StoryPhase::Empty;
        }
        drop(phase);
        self.app.in_flight.store(false, Ordering::Release);
    }
}

impl StoryApp {
    /// Create an app around a pipeline.
    pub fn new(pipeline: StoryPipeline) -> Self {
        Self {
            pipeline,
            phase: Mutex::new(StoryPhase::Empty),
            in_flight: AtomicBool::new(false),
        }
    }

    fn lock_phase(&self) -> MutexGuard<'_, StoryPhase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_phase(&self, phase: StoryPhase) {
        *self.lock_phase() = phase;
    }

    /// Current phase.
    pub fn phase(&self) -> StoryPhase {
        self.lock_phase().clone()
    }

    /// Whether a generation is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Whether the submit control is enabled for this input.
    pub fn can_submit(&self, input: &str) -> bool {
        !self.is_loading() && Category::parse(input).is_some()
    }

    /// Whether a finished story is on display.
    pub fn can_tell_another(&self) -> bool {
        self.lock_phase().is_ready()
    }

    /// The finished story, if any.
    pub fn story(&self) -> Option<IllustratedStory> {
        match &*self.lock_phase() {
            StoryPhase::Ready(story) => Some(story.clone()),
            _ => None,
        }
    }

    /// Message from the last failed attempt, if that is what is showing.
    pub fn error_message(&self) -> Option<String> {
        match &*self.lock_phase() {
            StoryPhase::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Segments of the finished story, in reading order.
    pub fn segments(&self) -> Vec<RenderSegment> {
        self.story().map(|s| compose_segments(&s)).unwrap_or_default()
    }

    /// Narration text for the finished story.
    pub fn narration(&self) -> Option<String> {
        self.story().map(|s| narration_text(&s))
    }

    /// Clear the story view and return to the input form.
    ///
    /// Has no effect while a generation is in flight.
    pub fn tell_another(&self) {
        if !self.is_loading() {
            self.set_phase(StoryPhase::Empty);
        }
    }

    /// Generate a story for raw category input.
    ///
    /// The previous story and error are cleared when generation starts. On
    /// failure the phase shows the error's user-facing message.
    ///
    /// # Errors
    ///
    /// `EmptyCategory` for blank input and `AlreadyGenerating` while another
    /// submit is in flight (both leave the phase untouched), otherwise any
    /// pipeline error.
    #[instrument(skip(self))]
    pub async fn submit(&self, input: &str) -> FabulistResult<IllustratedStory> {
        let category =
            Category::parse(input).ok_or_else(|| StoryError::new(StoryErrorKind::EmptyCategory))?;
        let _guard = InFlight::acquire(self)
            .ok_or_else(|| StoryError::new(StoryErrorKind::AlreadyGenerating))?;
        self.set_phase(StoryPhase::Loading);

        match self.pipeline.generate(&category).await {
            Ok(story) => {
                info!(title = %story.title(), "Story ready");
                self.set_phase(StoryPhase::Ready(story.clone()));
                Ok(story)
            }
            Err(e) => {
                error!(error = %e, "Story generation failed");
                self.set_phase(StoryPhase::Failed(e.user_message().to_string()));
                Err(e)
            }
        }
    }
}
