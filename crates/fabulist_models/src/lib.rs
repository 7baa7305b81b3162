//! Generative provider integrations for Fabulist.
//!
//! Currently one provider is implemented: Google Gemini, which covers all
//! three capabilities the story pipeline needs (structured story text,
//! Imagen illustrations and text-to-speech).
//!
//! # Example
//!
//! ```no_run
//! use fabulist_config::FabulistConfig;
//! use fabulist_models::GeminiClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FabulistConfig::load()?;
//! let client = GeminiClient::from_settings(config.gemini())?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod metrics;

pub use gemini::{
    Candidate, Content, GeminiClient, GeminiResult, GenerateContentRequest,
    GenerateContentRequestBuilder, GenerateContentResponse, GenerationConfig,
    GenerationConfigBuilder, InlineData, OutputOptions, Part, PredictInstance, PredictParameters,
    PredictRequest, PredictResponse, Prediction, PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};
pub use metrics::{ProviderMetrics, classify_error};
