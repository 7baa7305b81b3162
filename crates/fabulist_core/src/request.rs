//! Request types handed to provider implementations.

use serde::{Deserialize, Serialize};

/// A structured-output text generation request for one story.
///
/// # Examples
///
/// ```
/// use fabulist_core::StoryRequest;
/// use serde_json::json;
///
/// let request = StoryRequest {
///     model: "gemini-2.5-flash".to_string(),
///     system_instruction: "You are a storyteller.".to_string(),
///     prompt: "Write a story about space.".to_string(),
///     response_mime_type: "application/json".to_string(),
///     response_schema: json!({ "type": "OBJECT" }),
///     temperature: Some(0.8),
///     top_k: Some(40),
///     top_p: Some(0.95),
/// };
///
/// assert_eq!(request.model, "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRequest {
    /// Model identifier to use
    pub model: String,
    /// Fixed instruction describing tone and safety constraints
    pub system_instruction: String,
    /// User prompt embedding the category
    pub prompt: String,
    /// MIME type the response must use
    pub response_mime_type: String,
    /// Schema the structured response must satisfy
    pub response_schema: serde_json::Value,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Top-k sampling
    pub top_k: Option<u32>,
    /// Top-p sampling
    pub top_p: Option<f32>,
}

/// A request for a single illustration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Model identifier to use
    pub model: String,
    /// Full prompt, style wrapper included
    pub prompt: String,
    /// Number of images to generate
    pub number_of_images: u32,
    /// MIME type of the generated image
    pub mime_type: String,
    /// Aspect ratio such as "3:4"
    pub aspect_ratio: String,
}

/// A request to synthesize speech for a narration string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Model identifier to use
    pub model: String,
    /// Text to read aloud
    pub text: String,
    /// Prebuilt voice name
    pub voice: String,
}
