//! Conversions between Fabulist request types and Gemini wire types.

use fabulist_core::{GeneratedImage, ImageRequest, SpeechRequest, StoryRequest};
use fabulist_error::{GeminiError, GeminiErrorKind};

use super::GeminiResult;
use super::dto::{
    Content, GenerateContentRequest, GenerationConfig, PredictParameters, PredictRequest,
    PredictResponse, SpeechConfig,
};

fn builder_error(e: impl std::fmt::Display) -> GeminiError {
    GeminiError::new(GeminiErrorKind::ApiRequest(format!(
        "Failed to build request: {}",
        e
    )))
}

/// Build a structured-output `generateContent` body for a story request.
pub fn to_story_request(req: &StoryRequest) -> GeminiResult<GenerateContentRequest> {
    let mut config = GenerationConfig::builder();
    config
        .response_mime_type(req.response_mime_type.clone())
        .response_schema(req.response_schema.clone());
    if let Some(temperature) = req.temperature {
        config.temperature(temperature);
    }
    if let Some(top_k) = req.top_k {
        config.top_k(top_k);
    }
    if let Some(top_p) = req.top_p {
        config.top_p(top_p);
    }
    let config = config.build().map_err(builder_error)?;

    GenerateContentRequest::builder()
        .contents(vec![Content::user_text(req.prompt.clone())])
        .system_instruction(Content::text(req.system_instruction.clone()))
        .generation_config(config)
        .build()
        .map_err(builder_error)
}

/// Build a `generateContent` body that asks for spoken audio.
pub fn to_speech_request(req: &SpeechRequest) -> GeminiResult<GenerateContentRequest> {
    let config = GenerationConfig::builder()
        .response_modalities(vec!["AUDIO".to_string()])
        .speech_config(SpeechConfig::prebuilt(req.voice.clone()))
        .build()
        .map_err(builder_error)?;

    GenerateContentRequest::builder()
        .contents(vec![Content::user_text(req.text.clone())])
        .generation_config(config)
        .build()
        .map_err(builder_error)
}

/// Build an Imagen `predict` body.
pub fn to_predict_request(req: &ImageRequest) -> PredictRequest {
    PredictRequest::new(
        req.prompt.clone(),
        PredictParameters::new(
            req.number_of_images,
            req.mime_type.clone(),
            req.aspect_ratio.clone(),
        ),
    )
}

/// Extract the generated images, skipping filtered or empty predictions.
///
/// Predictions without their own MIME type fall back to `requested_mime`.
pub fn from_predict_response(
    response: PredictResponse,
    requested_mime: &str,
) -> Vec<GeneratedImage> {
    response
        .predictions()
        .iter()
        .filter_map(|p| {
            let data = p.bytes_base64_encoded().as_deref()?;
            if data.is_empty() {
                return None;
            }
            let mime = p.mime_type().as_deref().unwrap_or(requested_mime);
            Some(GeneratedImage::new(mime, data))
        })
        .collect()
}
