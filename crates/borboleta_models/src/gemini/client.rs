//! Gemini REST driver.

use super::wire::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use borboleta_core::{GeminiConfig, GenerateRequest, GenerateResponse, Output};
use borboleta_error::{BorboletaResult, GeminiError, GeminiErrorKind};
use borboleta_interface::BorboletaDriver;
use std::env;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Client for the Gemini `generateContent` endpoint.
///
/// The API key is sent in the `x-goog-api-key` header. Requests are made
/// once; failures are returned to the caller unchanged.
///
/// # Example
///
/// ```no_run
/// use borboleta_core::GeminiConfig;
/// use borboleta_models::GeminiClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::from_config(&GeminiConfig::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: f32,
    max_output_tokens: Option<u32>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with default settings.
    ///
    /// Reads the API key from `GEMINI_API_KEY`, falling back to `API_KEY`.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> BorboletaResult<Self> {
        Self::from_config(&GeminiConfig::default())
    }

    /// Create a client from configuration, reading the key from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when no key is set.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn from_config(config: &GeminiConfig) -> BorboletaResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::ClientCreation`] if the HTTP client cannot
    /// be built.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn with_api_key(api_key: impl Into<String>, config: &GeminiConfig) -> BorboletaResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(api_base = %config.api_base(), "Gemini client ready");

        Ok(Self {
            http,
            api_key: api_key.into(),
            api_base: config.api_base().trim_end_matches('/').to_string(),
            model: config.model().clone(),
            temperature: config.temperature(),
            max_output_tokens: config.max_output_tokens(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }

    async fn send(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.endpoint(model);
        debug!(url = %url, "Sending Gemini request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(text) if !text.trim().is_empty() => text,
                _ => status.canonical_reason().unwrap_or("unknown").to_string(),
            };
            error!(status = status.as_u16(), message = %message, "Gemini API returned an error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseDecode(e.to_string())))
    }
}

#[async_trait]
impl BorboletaDriver for GeminiClient {
    #[instrument(skip(self, req), fields(provider = "gemini", messages = req.messages().len()))]
    async fn generate(&self, req: &GenerateRequest) -> BorboletaResult<GenerateResponse> {
        let model = req.model().as_deref().unwrap_or(&self.model);
        let body =
            GenerateContentRequest::from_request(req, self.temperature, self.max_output_tokens);

        let text = self.send(model, &body).await?.into_text()?;
        debug!(model, chars = text.chars().count(), "Gemini response received");

        Ok(GenerateResponse::new(vec![Output::Text(text)]))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
