//! Gemini REST API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One piece of a content turn: text or inline binary data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Inline binary content (audio, images)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    /// A text-only part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// Base64 payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g. "audio/L16;codec=pcm;rate=24000"
    #[serde(default)]
    mime_type: String,
    /// Base64-encoded bytes
    data: String,
}

/// A content turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Content {
    /// Author role ("user" or "model"); omitted for system instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Ordered parts
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// A user turn holding one text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::from_text(text)],
        }
    }

    /// A role-less content block holding one text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::from_text(text)],
        }
    }
}

/// Prebuilt voice selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    /// Voice name, e.g. "Kore"
    voice_name: String,
}

/// Voice configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// Prebuilt voice
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// Speech output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    /// Voice configuration
    voice_config: VoiceConfig,
}

impl SpeechConfig {
    /// Speak with a prebuilt voice.
    pub fn prebuilt(voice_name: impl Into<String>) -> Self {
        Self {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice_name.into(),
                },
            },
        }
    }
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), default)]
pub struct GenerationConfig {
    /// Sampling temperature
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Top-k sampling
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    /// Top-p sampling
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Response MIME type for structured output
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    /// Response schema for structured output
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    /// Requested output modalities, e.g. `["AUDIO"]`
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    /// Speech output configuration
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
}

impl GenerationConfig {
    /// Creates a new builder for `GenerationConfig`.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Conversation turns
    contents: Vec<Content>,
    /// System instruction
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    /// Generation parameters
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Creates a new builder for `GenerateContentRequest`.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    content: Option<Content>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Response of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, best first
    #[serde(default)]
    candidates: Vec<Candidate>,
    /// Safety feedback about the prompt, kept for logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prompt_feedback: Option<serde_json::Value>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text of the first candidate, or `None` if it has none.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }

    /// Base64 payload of the first inline-data part of the first candidate.
    pub fn inline_data(&self) -> Option<&InlineData> {
        self.first_parts()
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .filter(|d| !d.data.is_empty())
    }

    /// Finish reason of the first candidate.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }
}

/// One Imagen prompt instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct PredictInstance {
    /// Image prompt
    prompt: String,
}

impl PredictInstance {
    /// Wrap a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Output encoding options for Imagen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Output MIME type
    mime_type: String,
}

/// Imagen generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Number of images to generate
    sample_count: u32,
    /// Aspect ratio such as "3:4"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aspect_ratio: Option<String>,
    /// Output encoding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output_options: Option<OutputOptions>,
}

impl PredictParameters {
    /// Parameters for `sample_count` images of the given type and shape.
    pub fn new(sample_count: u32, mime_type: impl Into<String>, aspect_ratio: impl Into<String>) -> Self {
        Self {
            sample_count,
            aspect_ratio: Some(aspect_ratio.into()),
            output_options: Some(OutputOptions {
                mime_type: mime_type.into(),
            }),
        }
    }
}

/// Body of an Imagen `predict` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct PredictRequest {
    /// Prompt instances
    instances: Vec<PredictInstance>,
    /// Generation parameters
    parameters: PredictParameters,
}

impl PredictRequest {
    /// A request for one prompt.
    pub fn new(prompt: impl Into<String>, parameters: PredictParameters) -> Self {
        Self {
            instances: vec![PredictInstance::new(prompt)],
            parameters,
        }
    }
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64-encoded image bytes
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    /// MIME type of the image
    #[serde(default)]
    mime_type: Option<String>,
    /// Reason the image was filtered, if it was
    #[serde(default)]
    rai_filtered_reason: Option<String>,
}

/// Response of an Imagen `predict` call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct PredictResponse {
    /// Generated images; absent when every candidate was filtered
    #[serde(default)]
    predictions: Vec<Prediction>,
}
