//! Narration audio for Fabulist.
//!
//! Speech providers return raw 16-bit PCM as base64. This crate decodes it
//! into an [`AudioBuffer`], and a [`PlaybackSession`] drives one
//! [`AudioOutput`] through the read-aloud cycle:
//!
//! - [`WavFileOutput`] renders narration to a WAV file
//! - `SpeakerOutput` (feature `playback`) plays it on the default device

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod output;
mod session;

pub use decoder::{AudioBuffer, decode_base64, decode_pcm16, decode_speech};
#[cfg(feature = "playback")]
pub use output::SpeakerOutput;
pub use output::{AudioOutput, WavFileOutput};
pub use session::{PlaybackSession, PlaybackState, speech_request, synthesize_narration};
