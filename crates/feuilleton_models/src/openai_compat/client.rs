//! Generic client for OpenAI-compatible APIs.

use crate::openai_compat::{ChatResponse, conversions};
use feuilleton_core::{GenerateRequest, GenerateResponse};
use feuilleton_error::{BackendError, FeuilletonResult, HttpError, JsonError};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Generic client for any OpenAI-compatible chat completions API.
///
/// Handles the common `/v1/chat/completions` format used by OpenAI itself
/// and by the many services that mirror it.
#[derive(Debug, Clone)]
pub struct OpenAiCompatClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiCompatClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for authentication
    /// * `model` - Model identifier
    /// * `base_url` - Base URL of the service (without the `/v1/...` suffix)
    /// * `temperature` - Default sampling temperature
    /// * `max_tokens` - Default completion budget
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        let client = Client::new();
        let base_url = base_url.trim_end_matches('/').to_string();

        debug!(model = %model, url = %base_url, "Created OpenAI-compatible client");

        Self {
            client,
            api_key,
            model,
            base_url,
            temperature,
            max_tokens,
        }
    }

    fn url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// Generates a completion from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-success
    /// status, or the response cannot be parsed.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate(&self, req: &GenerateRequest) -> FeuilletonResult<GenerateResponse> {
        // Request-level overrides win over the configured defaults.
        let effective = GenerateRequest {
            temperature: req.temperature.or(Some(self.temperature)),
            max_tokens: req.max_tokens.or(Some(self.max_tokens)),
            ..req.clone()
        };
        let chat_request = conversions::to_chat_request(&effective, &self.model)?;

        debug!(
            model = %self.model,
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(BackendError::new(format!(
                "API error (status {}): {}",
                status.as_u16(),
                error_text
            ))
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            JsonError::new(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        conversions::from_chat_response(&chat_response)
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}
