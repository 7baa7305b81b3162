//! Google Gemini REST API client implementation.
//!
//! [`GeminiClient`] implements every Fabulist capability trait:
//! - `TextGeneration` via `models/{model}:generateContent` with a response schema
//! - `ImageGeneration` via Imagen's `models/{model}:predict`
//! - `SpeechSynthesis` via `generateContent` with the `AUDIO` response modality
//!
//! Requests are issued once; there is no retry or client-side throttling.

mod client;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentRequestBuilder,
    GenerateContentResponse, GenerationConfig, GenerationConfigBuilder, InlineData, Part,
    OutputOptions, PredictInstance, PredictParameters, PredictRequest, PredictResponse, Prediction,
    PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, fabulist_error::GeminiError>;
