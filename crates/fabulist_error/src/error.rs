//! Top-level error wrapper types.

use crate::{AudioError, ConfigError, GeminiError, StoryError};

/// Every error condition the Fabulist workspace can surface.
///
/// # Examples
///
/// ```
/// use fabulist_error::{FabulistError, ConfigError};
///
/// let err: FabulistError = ConfigError::invalid("gemini.timeout_secs", "must be greater than 0").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulistErrorKind {
    /// Text or illustration phase error
    #[from(StoryError)]
    Story(StoryError),
    /// Narration or playback error
    #[from(AudioError)]
    Audio(AudioError),
    /// Gemini transport error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Fabulist error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabulist_error::{FabulistResult, StoryError, StoryErrorKind};
///
/// fn might_fail() -> FabulistResult<()> {
///     Err(StoryError::new(StoryErrorKind::EmptyResponse))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert_eq!(
///     err.user_message(),
///     "Received an empty response from the AI for the story."
/// );
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabulist Error: {}", _0)]
pub struct FabulistError(Box<FabulistErrorKind>);

impl FabulistError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulistErrorKind {
        &self.0
    }

    /// The story-phase kind, if this is a story error.
    pub fn story_kind(&self) -> Option<&crate::StoryErrorKind> {
        match self.kind() {
            FabulistErrorKind::Story(e) => Some(&e.kind),
            _ => None,
        }
    }

    /// The audio-phase kind, if this is an audio error.
    pub fn audio_kind(&self) -> Option<&crate::AudioErrorKind> {
        match self.kind() {
            FabulistErrorKind::Audio(e) => Some(&e.kind),
            _ => None,
        }
    }

    /// Short sentence suitable for a front-end error region.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            FabulistErrorKind::Story(e) => e.user_message(),
            FabulistErrorKind::Audio(e) => e.user_message(),
            FabulistErrorKind::Gemini(e) if e.kind.is_rate_limited() => {
                "The storyteller is very busy right now. Please wait a moment and try again."
            }
            FabulistErrorKind::Gemini(_) => {
                "We couldn't reach the storyteller. Please try again."
            }
            FabulistErrorKind::Config(_) => "Fabulist is not configured correctly.",
        }
    }
}

// Generic From implementation for any type that converts to FabulistErrorKind
impl<T> From<T> for FabulistError
where
    T: Into<FabulistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabulist operations.
pub type FabulistResult<T> = std::result::Result<T, FabulistError>;
