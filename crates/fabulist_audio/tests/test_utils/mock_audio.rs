//! Mock speech provider and audio output.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fabulist_audio::{AudioBuffer, AudioOutput};
use fabulist_core::SpeechRequest;
use fabulist_error::{AudioError, AudioErrorKind, FabulistResult, GeminiError, GeminiErrorKind};
use fabulist_interface::{FabulistDriver, SpeechSynthesis};
use std::sync::{Arc, Mutex};

/// Base64 encoding of little-endian 16-bit samples.
pub fn pcm_base64(samples: &[i16]) -> String {
    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    STANDARD.encode(bytes)
}

/// Mock speech provider with a fixed reply.
pub struct MockNarrator {
    reply: Result<Option<String>, GeminiErrorKind>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<SpeechRequest>>>,
}

impl MockNarrator {
    /// Reply with the given base64 payload.
    pub fn new_audio(payload: impl Into<String>) -> Self {
        Self::new(Ok(Some(payload.into())))
    }

    /// Reply without audio data.
    #[allow(dead_code)]
    pub fn new_silent() -> Self {
        Self::new(Ok(None))
    }

    /// Fail with a transport error.
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

    /// Number of synthesis calls.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Most recent request.
    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<SpeechRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl FabulistDriver for MockNarrator {
    fn provider_name(&self) -> &'static str {
        "mock-narrator"
    }
}

#[async_trait]
impl SpeechSynthesis for MockNarrator {
    async fn synthesize_speech(&self, req: &SpeechRequest) -> FabulistResult<Option<String>> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(req.clone());
        match &self.reply {
            Ok(payload) => Ok(payload.clone()),
            Err(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }
}

/// Everything a [`MockOutput`] has been asked to do.
#[derive(Debug, Default)]
pub struct OutputLog {
    /// Gain passed to each start
    pub start_gains: Vec<f32>,
    /// Frames of each started buffer
    pub start_frames: Vec<usize>,
    /// Every set_gain call
    pub gain_changes: Vec<f32>,
    /// Number of stop calls
    pub stops: usize,
    /// Whether the current sound has ended
    pub finished: bool,
    /// Fail the next start
    pub fail_next_start: bool,
}

/// Output whose progress the test controls through a shared log.
#[derive(Clone, Default)]
pub struct MockOutput {
    log: Arc<Mutex<OutputLog>>,
}

impl MockOutput {
    /// Create an output with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the log.
    pub fn log(&self) -> Arc<Mutex<OutputLog>> {
        Arc::clone(&self.log)
    }

    /// Mark the current sound as ended.
    #[allow(dead_code)]
    pub fn finish(&self) {
        self.log.lock().unwrap().finished = true;
    }
}

impl AudioOutput for MockOutput {
    fn start(&mut self, buffer: &AudioBuffer, gain: f32) -> FabulistResult<()> {
        let mut log = self.log.lock().unwrap();
        if log.fail_next_start {
            log.fail_next_start = false;
            return Err(AudioError::new(AudioErrorKind::Output("device unplugged".into())).into());
        }
        log.start_gains.push(gain);
        log.start_frames.push(buffer.length());
        log.finished = false;
        Ok(())
    }

    fn set_gain(&mut self, gain: f32) {
        self.log.lock().unwrap().gain_changes.push(gain);
    }

    fn is_finished(&self) -> bool {
        self.log.lock().unwrap().finished
    }

    fn stop(&mut self) {
        let mut log = self.log.lock().unwrap();
        log.stops += 1;
        log.finished = true;
    }
}
