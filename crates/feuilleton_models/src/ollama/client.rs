//! Client for a local Ollama server.

use crate::ollama::{OllamaRequest, OllamaResponse};
use feuilleton_core::{GenerateRequest, GenerateResponse};
use feuilleton_error::{BackendError, FeuilletonResult, HttpError, JsonError};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for the Ollama `/api/generate` endpoint.
///
/// Ollama takes a single prompt string rather than a message list, so the
/// request's messages are flattened into one prompt in order.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OllamaClient {
    /// Creates a new Ollama client.
    #[instrument(fields(model = %model))]
    pub fn new(model: String, base_url: String, temperature: f32) -> Self {
        let client = Client::new();
        let base_url = base_url.trim_end_matches('/').to_string();

        debug!(model = %model, url = %base_url, "Created Ollama client");

        Self {
            client,
            model,
            base_url,
            temperature,
        }
    }

    fn url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Generates a completion from the local server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports a
    /// non-success status, or the response cannot be parsed.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate(&self, req: &GenerateRequest) -> FeuilletonResult<GenerateResponse> {
        let prompt = req
            .messages
            .iter()
            .map(|m| m.content().as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let request = OllamaRequest {
            model: self.model.clone(),
            prompt,
            temperature: req.temperature.unwrap_or(self.temperature),
            stream: false,
        };

        debug!(model = %self.model, "Sending request");

        let response = self
            .client
            .post(self.url())
            .json(&request)
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

        let body: OllamaResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            JsonError::new(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(done = body.done, "Received response");

        Ok(GenerateResponse {
            text: body.response,
        })
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}
