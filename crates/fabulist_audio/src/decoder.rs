//! Base64 PCM decoding into normalized sample buffers.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fabulist_core::NarrationSettings;
use fabulist_error::{AudioError, AudioErrorKind, FabulistError, FabulistResult};
use std::time::Duration;
use tracing::{debug, instrument};

const BYTES_PER_SAMPLE: usize = 2;
const I16_SCALE: f32 = 32768.0;

fn decode_failed(reason: impl Into<String>) -> FabulistError {
    AudioError::new(AudioErrorKind::AudioDecodeFailed(reason.into())).into()
}

/// Decoded audio: planar `f32` samples in [-1.0, 1.0) at a fixed rate.
///
/// # Examples
///
/// ```
/// use fabulist_audio::decode_pcm16;
///
/// let bytes: Vec<u8> = [0i16, 16384, -16384, 32767]
///     .iter()
///     .flat_map(|s| s.to_le_bytes())
///     .collect();
/// let buffer = decode_pcm16(&bytes, 24_000, 1).unwrap();
///
/// assert_eq!(buffer.length(), 4);
/// assert_eq!(buffer.channel(0).unwrap()[1], 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Frames per second.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn channel_count(&self) -> u16 {
        // Channel count comes from a u16 at construction
        self.channels.len() as u16
    }

    /// Number of frames.
    pub fn length(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Playing time.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.length() as f64 / f64::from(self.sample_rate))
    }

    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Samples interleaved frame by frame, as audio devices expect.
    pub fn interleaved(&self) -> Vec<f32> {
        let mut samples = Vec::with_capacity(self.length() * self.channels.len());
        for frame in 0..self.length() {
            samples.extend(self.channels.iter().map(|channel| channel[frame]));
        }
        samples
    }
}

/// Decode standard, padded base64.
///
/// # Errors
///
/// `AudioDecodeFailed` if the text is not valid base64.
pub fn decode_base64(data: &str) -> FabulistResult<Vec<u8>> {
    STANDARD
        .decode(data)
        .map_err(|e| decode_failed(format!("invalid base64: {}", e)))
}

/// Interpret signed 16-bit little-endian PCM as a normalized buffer.
///
/// Interleaved multi-channel input is split into planar channels.
///
/// # Errors
///
/// `AudioDecodeFailed` if the payload is empty, its length is not a whole
/// number of frames, or the rate or channel count is zero.
pub fn decode_pcm16(bytes: &[u8], sample_rate: u32, channels: u16) -> FabulistResult<AudioBuffer> {
    if sample_rate == 0 || channels == 0 {
        return Err(decode_failed(format!(
            "invalid format: {} Hz, {} channels",
            sample_rate, channels
        )));
    }
    if bytes.is_empty() {
        return Err(decode_failed("audio payload is empty"));
    }

    let channel_count = usize::from(channels);
    let frame_bytes = BYTES_PER_SAMPLE * channel_count;
    if bytes.len() % frame_bytes != 0 {
        return Err(decode_failed(format!(
            "{} bytes is not a whole number of {}-byte frames",
            bytes.len(),
            frame_bytes
        )));
    }

    let frames = bytes.len() / frame_bytes;
    let mut planar = vec![Vec::with_capacity(frames); channel_count];
    for (i, pair) in bytes.chunks_exact(BYTES_PER_SAMPLE).enumerate() {
        let sample = i16::from_le_bytes([pair[0], pair[1]]);
        planar[i % channel_count].push(f32::from(sample) / I16_SCALE);
    }

    Ok(AudioBuffer {
        sample_rate,
        channels: planar,
    })
}

/// Decode a speech payload using the configured PCM format.
#[instrument(skip_all, fields(chars = data.len()))]
pub fn decode_speech(data: &str, settings: &NarrationSettings) -> FabulistResult<AudioBuffer> {
    let bytes = decode_base64(data)?;
    let buffer = decode_pcm16(&bytes, *settings.sample_rate(), *settings.channels())?;
    debug!(
        frames = buffer.length(),
        seconds = buffer.duration().as_secs_f32(),
        "Decoded speech"
    );
    Ok(buffer)
}
