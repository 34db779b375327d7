//! Data transfer objects for the Ollama generate API.

use serde::{Deserialize, Serialize};

/// Ollama `/api/generate` request.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaRequest {
    /// Model identifier
    pub model: String,
    /// The raw prompt text
    pub prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Always false: the full completion is returned in one body
    pub stream: bool,
}

/// Ollama `/api/generate` response.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaResponse {
    /// The full completion text
    pub response: String,
    /// Whether generation ran to completion
    #[serde(default)]
    pub done: bool,
}
