//! Read-aloud state machine.

use fabulist_core::{NarrationSettings, SpeechRequest};
use fabulist_error::{AudioError, AudioErrorKind, FabulistError, FabulistResult};
use fabulist_interface::SpeechSynthesis;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::{AudioBuffer, AudioOutput, decode_speech};

/// Where a playback session is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIs)]
#[strum(serialize_all = "snake_case")]
pub enum PlaybackState {
    /// Nothing playing; a new request may start
    Idle,
    /// Speech is being synthesized and decoded
    Loading,
    /// One sound is playing
    Playing,
}

/// Build the speech request for a narration string.
pub fn speech_request(text: &str, settings: &NarrationSettings) -> SpeechRequest {
    SpeechRequest {
        model: settings.model().clone(),
        text: text.to_string(),
        voice: settings.voice().clone(),
    }
}

/// Synthesize and decode narration without playing it.
///
/// # Errors
///
/// `SpeechGenerationFailed` if the provider fails or returns no audio,
/// `AudioDecodeFailed` if the payload cannot be decoded.
#[instrument(skip_all, fields(provider = narrator.provider_name(), chars = text.len()))]
pub async fn synthesize_narration(
    narrator: &dyn SpeechSynthesis,
    settings: &NarrationSettings,
    text: &str,
) -> FabulistResult<AudioBuffer> {
    let request = speech_request(text, settings);
    let payload = narrator
        .synthesize_speech(&request)
        .await
        .map_err(|e| {
            AudioError::new(AudioErrorKind::SpeechGenerationFailed(e.to_string()))
        })?
        .ok_or_else(|| {
            AudioError::new(AudioErrorKind::SpeechGenerationFailed(
                "no audio data in response".to_string(),
            ))
        })?;
    decode_speech(&payload, settings)
}

/// Owns one audio output and plays at most one narration at a time.
///
/// ```text
/// Idle --begin--> Loading --start--> Playing --finished/stop--> Idle
///                    \--error--> Idle (last_error set)
/// ```
///
/// Mute is orthogonal to the state and persists across plays.
///
/// # Examples
///
/// ```
/// use fabulist_audio::{PlaybackSession, PlaybackState, WavFileOutput, decode_pcm16};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = std::env::temp_dir().join("fabulist-doc-session.wav");
/// let mut session = PlaybackSession::new(WavFileOutput::new(&dir));
///
/// session.begin()?;
/// let buffer = decode_pcm16(&[0, 0, 0, 64], 24_000, 1)?;
/// session.start(buffer)?;
/// assert!(session.poll_finished());
/// assert_eq!(session.state(), PlaybackState::Idle);
/// session.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PlaybackSession<O: AudioOutput> {
    output: O,
    state: PlaybackState,
    muted: bool,
    last_error: Option<String>,
}

impl<O: AudioOutput> PlaybackSession<O> {
    /// Acquire a session over an output.
    pub fn new(output: O) -> Self {
        Self {
            output,
            state: PlaybackState::Idle,
            muted: false,
            last_error: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether a new narration can start.
    pub fn can_play(&self) -> bool {
        self.state.is_idle()
    }

    /// Whether output is muted.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// User-facing message from the most recent failure.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The output this session drives.
    pub fn output(&self) -> &O {
        &self.output
    }

    fn gain(&self) -> f32 {
        if self.muted { 0.0 } else { 1.0 }
    }

    /// Enter `Loading`.
    ///
    /// # Errors
    ///
    /// `PlaybackBusy` unless the session is idle.
    pub fn begin(&mut self) -> FabulistResult<()> {
        if !self.state.is_idle() {
            debug!(state = %self.state, "Rejecting play request");
            return Err(AudioError::new(AudioErrorKind::PlaybackBusy(self.state.to_string())).into());
        }
        self.state = PlaybackState::Loading;
        self.last_error = None;
        Ok(())
    }

    /// Play a decoded buffer, moving `Loading` to `Playing`.
    ///
    /// # Errors
    ///
    /// `PlaybackBusy` if the session is not loading; output errors return
    /// the session to `Idle`.
    pub fn start(&mut self, buffer: AudioBuffer) -> FabulistResult<()> {
        if !self.state.is_loading() {
            return Err(AudioError::new(AudioErrorKind::PlaybackBusy(self.state.to_string())).into());
        }
        match self.output.start(&buffer, self.gain()) {
            Ok(()) => {
                self.state = PlaybackState::Playing;
                info!(seconds = buffer.duration().as_secs_f32(), "Narration playing");
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Abandon a load, recording the error for display.
    pub fn fail(&mut self, error: FabulistError) -> FabulistError {
        warn!(error = %error, "Narration failed");
        self.state = PlaybackState::Idle;
        self.last_error = Some(error.user_message().to_string());
        error
    }

    /// Synthesize `text` and start playing it.
    ///
    /// # Errors
    ///
    /// `PlaybackBusy` if not idle (state unchanged); otherwise speech,
    /// decode or output errors, after which the session is idle again.
    #[instrument(skip_all, fields(chars = text.len()))]
    pub async fn read_aloud(
        &mut self,
        narrator: &dyn SpeechSynthesis,
        settings: &NarrationSettings,
        text: &str,
    ) -> FabulistResult<()> {
        self.begin()?;
        match synthesize_narration(narrator, settings, text).await {
            Ok(buffer) => self.start(buffer),
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Check the output; returns `true` once nothing is playing.
    pub fn poll_finished(&mut self) -> bool {
        if self.state.is_playing() && self.output.is_finished() {
            debug!("Narration finished");
            self.state = PlaybackState::Idle;
        }
        !self.state.is_playing()
    }

    /// Poll until the current sound ends.
    pub async fn wait_until_finished(&mut self, interval: Duration) {
        while !self.poll_finished() {
            tokio::time::sleep(interval).await;
        }
    }

    /// Stop the current sound and return to `Idle`.
    pub fn stop(&mut self) {
        if self.state.is_playing() {
            self.output.stop();
            self.state = PlaybackState::Idle;
            debug!("Narration stopped");
        }
    }

    /// Set the mute flag; applies to the current sound immediately.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        let gain = self.gain();
        self.output.set_gain(gain);
    }

    /// Flip the mute flag and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    /// Tear the session down, stopping any active sound.
    pub fn close(mut self) {
        self.stop();
        debug!("Playback session closed");
    }
}
