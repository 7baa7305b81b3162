//! Audio sinks a playback session can drive.

use fabulist_error::{AudioError, AudioErrorKind, FabulistError, FabulistResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::AudioBuffer;

pub(crate) fn output_error(reason: impl Into<String>) -> FabulistError {
    AudioError::new(AudioErrorKind::Output(reason.into())).into()
}

/// A destination that plays one buffer at a time.
pub trait AudioOutput {
    /// Start playing `buffer` at `gain` (0.0 silent, 1.0 full).
    fn start(&mut self, buffer: &AudioBuffer, gain: f32) -> FabulistResult<()>;

    /// Change the gain of the current and future sounds.
    fn set_gain(&mut self, gain: f32);

    /// Whether the last started sound has completed.
    fn is_finished(&self) -> bool;

    /// Stop the current sound, if any.
    fn stop(&mut self);
}

/// Renders narration to a 16-bit PCM WAV file.
///
/// Rendering completes inside [`AudioOutput::start`], so the sound is
/// finished as soon as it starts.
#[derive(Debug, Clone)]
pub struct WavFileOutput {
    path: PathBuf,
    gain: f32,
    written: usize,
}

impl WavFileOutput {
    /// Write to `path`, replacing any existing file on each start.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            gain: 1.0,
            written: 0,
        }
    }

    /// Destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of files written so far.
    pub fn files_written(&self) -> usize {
        self.written
    }
}

fn to_i16(sample: f32) -> i16 {
    (sample * 32768.0).round().clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16
}

impl AudioOutput for WavFileOutput {
    #[instrument(skip(self, buffer), fields(path = %self.path.display()))]
    fn start(&mut self, buffer: &AudioBuffer, gain: f32) -> FabulistResult<()> {
        self.gain = gain;
        let spec = hound::WavSpec {
            channels: buffer.channel_count(),
            sample_rate: buffer.sample_rate(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(&self.path, spec)
            .map_err(|e| output_error(format!("Failed to create WAV file: {}", e)))?;
        for sample in buffer.interleaved() {
            writer
                .write_sample(to_i16(sample * self.gain))
                .map_err(|e| output_error(format!("Failed to write audio sample: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| output_error(format!("Failed to finalize WAV file: {}", e)))?;

        self.written += 1;
        info!(
            frames = buffer.length(),
            seconds = buffer.duration().as_secs_f32(),
            "Narration written"
        );
        Ok(())
    }

    fn set_gain(&mut self, gain: f32) {
        debug!(gain, "WAV gain applies to the next render");
        self.gain = gain;
    }

    fn is_finished(&self) -> bool {
        true
    }

    fn stop(&mut self) {}
}

#[cfg(feature = "playback")]
pub use speaker::SpeakerOutput;

#[cfg(feature = "playback")]
mod speaker {
    use super::{AudioOutput, output_error};
    use crate::AudioBuffer;
    use fabulist_error::FabulistResult;
    use rodio::buffer::SamplesBuffer;
    use rodio::{OutputStream, OutputStreamBuilder, Sink};
    use tracing::{debug, instrument};

    /// Plays narration on the system's default output device.
    pub struct SpeakerOutput {
        // Dropping the stream silences every sink connected to it
        stream: OutputStream,
        sink: Option<Sink>,
    }

    impl std::fmt::Debug for SpeakerOutput {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SpeakerOutput")
                .field("active", &self.sink.is_some())
                .finish_non_exhaustive()
        }
    }

    impl SpeakerOutput {
        /// Open the default output device.
        pub fn open_default() -> FabulistResult<Self> {
            let stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| output_error(format!("Audio device initialization failed: {}", e)))?;
            Ok(Self { stream, sink: None })
        }
    }

    impl AudioOutput for SpeakerOutput {
        #[instrument(skip(self, buffer))]
        fn start(&mut self, buffer: &AudioBuffer, gain: f32) -> FabulistResult<()> {
            self.stop();
            let sink = Sink::connect_new(self.stream.mixer());
            sink.set_volume(gain);
            sink.append(SamplesBuffer::new(
                buffer.channel_count(),
                buffer.sample_rate(),
                buffer.interleaved(),
            ));
            debug!(frames = buffer.length(), "Narration queued");
            self.sink = Some(sink);
            Ok(())
        }

        fn set_gain(&mut self, gain: f32) {
            if let Some(sink) = &self.sink {
                sink.set_volume(gain);
            }
        }

        fn is_finished(&self) -> bool {
            self.sink.as_ref().is_none_or(Sink::empty)
        }

        fn stop(&mut self) {
            if let Some(sink) = self.sink.take() {
                sink.stop();
            }
        }
    }
}
