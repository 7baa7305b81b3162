//! Story generation error types.

/// Specific error conditions for the text and illustration phases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// The text service returned no text content
    #[display("Text service returned an empty response")]
    EmptyResponse,
    /// The text could not be parsed as a story object
    #[display("Malformed story response: {}", _0)]
    MalformedResponse(String),
    /// The story parsed but a required field is missing or empty
    #[display("Incomplete story: field '{}' is missing or empty", _0)]
    IncompleteStory(String),
    /// An illustration could not be produced
    #[display("Image generation failed for illustration {}: {}", index, reason)]
    ImageGenerationFailed {
        /// Zero-based position of the summary that failed
        index: usize,
        /// Why the illustration failed
        reason: String,
    },
    /// The category was blank after trimming
    #[display("Story category is empty")]
    EmptyCategory,
    /// A generation cycle is already in flight
    #[display("A story is already being generated")]
    AlreadyGenerating,
}

impl StoryErrorKind {
    /// Short sentence suitable for showing to the reader.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoryErrorKind::EmptyResponse => {
                "Received an empty response from the AI for the story."
            }
            StoryErrorKind::MalformedResponse(_) => {
                "The AI returned a story in an unexpected format. Please try again."
            }
            StoryErrorKind::IncompleteStory(_) => "Received incomplete story data from the AI.",
            StoryErrorKind::ImageGenerationFailed { .. } => {
                "There was a problem illustrating your story. Please try again."
            }
            StoryErrorKind::EmptyCategory => "Please enter a category for your story.",
            StoryErrorKind::AlreadyGenerating => {
                "A story is already being written. Please wait for it to finish."
            }
        }
    }
}

/// Error type for story generation.
///
/// # Examples
///
/// ```
/// use fabulist_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::IncompleteStory("moral".to_string()));
/// assert!(format!("{}", err).contains("moral"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Short sentence suitable for showing to the reader.
    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }
}
