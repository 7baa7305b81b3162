//! Narration and playback error types.

/// Specific error conditions for speech synthesis, decoding and playback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AudioErrorKind {
    /// The speech service failed or returned no audio
    #[display("Speech generation failed: {}", _0)]
    SpeechGenerationFailed(String),
    /// The audio payload could not be decoded into samples
    #[display("Audio decode failed: {}", _0)]
    AudioDecodeFailed(String),
    /// A play request arrived while the session was not idle
    #[display("Playback session is busy ({})", _0)]
    PlaybackBusy(String),
    /// The audio output device or file could not be used
    #[display("Audio output error: {}", _0)]
    Output(String),
}

impl AudioErrorKind {
    /// Short sentence suitable for showing to the listener.
    pub fn user_message(&self) -> &'static str {
        match self {
            AudioErrorKind::SpeechGenerationFailed(_) | AudioErrorKind::AudioDecodeFailed(_) => {
                "There was a problem preparing the audio for your story. Please try again."
            }
            AudioErrorKind::PlaybackBusy(_) => "The story is already being read aloud.",
            AudioErrorKind::Output(_) => "The story audio could not be played.",
        }
    }
}

/// Audio error with source location tracking.
///
/// # Examples
///
/// ```
/// use fabulist_error::{AudioError, AudioErrorKind};
///
/// let err = AudioError::new(AudioErrorKind::AudioDecodeFailed("odd byte count".into()));
/// assert!(format!("{}", err).contains("odd byte count"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Audio Error: {} at line {} in {}", kind, line, file)]
pub struct AudioError {
    /// The kind of error that occurred
    pub kind: AudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AudioError {
    /// Create a new AudioError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Short sentence suitable for showing to the listener.
    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }
}
