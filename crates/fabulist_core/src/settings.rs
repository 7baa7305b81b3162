//! Generation settings for each provider call.
//!
//! Defaults match what the provider produces best for short children's
//! stories; every field can be overridden from configuration.

use serde::{Deserialize, Serialize};

/// Settings for the story text request.
///
/// # Examples
///
/// ```
/// use fabulist_core::StorySettings;
///
/// let settings = StorySettings::default();
/// assert_eq!(settings.model(), "gemini-2.5-flash");
/// assert_eq!(*settings.temperature(), 0.8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StorySettings {
    /// Text model identifier
    #[serde(default = "default_story_model")]
    model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,

    /// Top-k sampling
    #[serde(default = "default_top_k")]
    top_k: u32,

    /// Top-p sampling
    #[serde(default = "default_top_p")]
    top_p: f32,
}

fn default_story_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.8
}

fn default_top_k() -> u32 {
    40
}

fn default_top_p() -> f32 {
    0.95
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            model: default_story_model(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
        }
    }
}

/// Settings for illustration requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct IllustrationSettings {
    /// Image model identifier
    #[serde(default = "default_image_model")]
    model: String,

    /// MIME type of generated images
    #[serde(default = "default_image_mime")]
    mime_type: String,

    /// Aspect ratio of generated images
    #[serde(default = "default_aspect_ratio")]
    aspect_ratio: String,
}

fn default_image_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

fn default_image_mime() -> String {
    "image/jpeg".to_string()
}

fn default_aspect_ratio() -> String {
    "3:4".to_string()
}

impl Default for IllustrationSettings {
    fn default() -> Self {
        Self {
            model: default_image_model(),
            mime_type: default_image_mime(),
            aspect_ratio: default_aspect_ratio(),
        }
    }
}

/// Settings for speech synthesis and PCM decoding.
///
/// The sample rate and channel count describe the raw PCM the speech model
/// returns; they are not negotiated with the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct NarrationSettings {
    /// Speech model identifier
    #[serde(default = "default_speech_model")]
    model: String,

    /// Prebuilt voice name
    #[serde(default = "default_voice")]
    voice: String,

    /// PCM sample rate in Hz
    #[serde(default = "default_sample_rate")]
    sample_rate: u32,

    /// PCM channel count
    #[serde(default = "default_channels")]
    channels: u16,
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_voice() -> String {
    "Kore".to_string()
}

fn default_sample_rate() -> u32 {
    24_000
}

fn default_channels() -> u16 {
    1
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            model: default_speech_model(),
            voice: default_voice(),
            sample_rate: default_sample_rate(),
            channels: default_channels(),
        }
    }
}
