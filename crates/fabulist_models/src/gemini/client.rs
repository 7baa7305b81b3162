//! Gemini REST client.

use async_trait::async_trait;
use fabulist_config::GeminiSettings;
use fabulist_core::{GeneratedImage, ImageRequest, SpeechRequest, StoryRequest};
use fabulist_error::{FabulistResult, GeminiError, GeminiErrorKind};
use fabulist_interface::{FabulistDriver, ImageGeneration, SpeechSynthesis, TextGeneration};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Instant;
use tracing::{debug, instrument, warn};

use super::GeminiResult;
use super::conversion;
use super::dto::{GenerateContentResponse, PredictResponse};
use crate::metrics::{ProviderMetrics, classify_error};

const PROVIDER: &str = "gemini";

/// Client for the Gemini REST API.
///
/// One client serves every capability; the model is chosen per request.
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    settings: GeminiSettings,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", self.settings.base_url())
            .field("timeout_secs", self.settings.timeout_secs())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client, reading the API key from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the variable is unset or empty, or
    /// `ClientCreation` if the HTTP client cannot be built.
    #[instrument(name = "gemini_client_new", skip_all, fields(api_key_env = %settings.api_key_env()))]
    pub fn from_settings(settings: &GeminiSettings) -> GeminiResult<Self> {
        let api_key = std::env::var(settings.api_key_env())
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GeminiError::new(GeminiErrorKind::MissingApiKey(
                    settings.api_key_env().clone(),
                ))
            })?;
        Self::with_api_key(api_key, settings.clone())
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns `ClientCreation` if the HTTP client cannot be built.
    #[instrument(name = "gemini_client_with_api_key", skip_all)]
    pub fn with_api_key(api_key: impl Into<String>, settings: GeminiSettings) -> GeminiResult<Self> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        debug!(base_url = %settings.base_url(), "Gemini client ready");
        Ok(Self {
            http,
            api_key: api_key.into(),
            settings,
        })
    }

    /// Connection settings in use.
    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    /// Full URL for `method` on `model`. Accepts bare or `models/`-prefixed names.
    pub fn endpoint(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!(
            "{}/models/{}:{}",
            self.settings.base_url().trim_end_matches('/'),
            model,
            method
        )
    }

    async fn post_json<B, R>(
        &self,
        model: &str,
        method: &str,
        operation: &'static str,
        body: &B,
    ) -> GeminiResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let url = self.endpoint(model, method);
        let metrics = ProviderMetrics::get();
        let started = Instant::now();
        debug!(url = %url, operation, "Sending Gemini API request");

        let result = self.send(&url, body).await;
        match &result {
            Ok(_) => {
                let elapsed = started.elapsed().as_secs_f64();
                debug!(operation, elapsed_secs = elapsed, "Gemini API request succeeded");
                metrics.record_request(PROVIDER, model, operation, elapsed);
            }
            Err(e) => {
                warn!(operation, error = %e, "Gemini API request failed");
                metrics.record_error(PROVIDER, model, operation, classify_error(e));
            }
        }
        result
    }

    async fn send<B, R>(&self, url: &str, body: &B) -> GeminiResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseDecode(e.to_string())))
    }
}

impl FabulistDriver for GeminiClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

#[async_trait]
impl TextGeneration for GeminiClient {
    #[instrument(skip(self, req), fields(model = %req.model))]
    async fn generate_story_text(&self, req: &StoryRequest) -> FabulistResult<Option<String>> {
        let body = conversion::to_story_request(req)?;
        let response: GenerateContentResponse = self
            .post_json(&req.model, "generateContent", "story", &body)
            .await?;
        if response.text().is_none() {
            debug!(finish_reason = ?response.finish_reason(), "Story response carried no text");
        }
        Ok(response.text())
    }
}

#[async_trait]
impl ImageGeneration for GeminiClient {
    #[instrument(skip(self, req), fields(model = %req.model))]
    async fn generate_images(&self, req: &ImageRequest) -> FabulistResult<Vec<GeneratedImage>> {
        let body = conversion::to_predict_request(req);
        let response: PredictResponse = self
            .post_json(&req.model, "predict", "illustration", &body)
            .await?;
        let images = conversion::from_predict_response(response, &req.mime_type);
        debug!(count = images.len(), "Illustration response decoded");
        Ok(images)
    }
}

#[async_trait]
impl SpeechSynthesis for GeminiClient {
    #[instrument(skip(self, req), fields(model = %req.model, voice = %req.voice, chars = req.text.len()))]
    async fn synthesize_speech(&self, req: &SpeechRequest) -> FabulistResult<Option<String>> {
        let body = conversion::to_speech_request(req)?;
        let response: GenerateContentResponse = self
            .post_json(&req.model, "generateContent", "speech", &body)
            .await?;
        let audio = response.inline_data().map(|d| {
            debug!(mime_type = %d.mime_type(), bytes = d.data().len(), "Speech payload received");
            d.data().clone()
        });
        Ok(audio)
    }
}
