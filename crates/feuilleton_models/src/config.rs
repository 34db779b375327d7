//! Backend configuration sections.
//!
//! These structs mirror the `ai_service` block of the configuration
//! document: a provider selector plus one sub-section per backend with its
//! credentials and parameters.

use serde::Deserialize;

fn default_openai_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_ollama_temperature() -> f32 {
    0.5
}

/// The `ai_service` configuration block.
#[derive(Debug, Clone, Deserialize)]
pub struct AiServiceConfig {
    /// Backend selector: "openai" or "ollama"
    pub provider: String,
    /// OpenAI-compatible backend settings
    #[serde(default)]
    pub openai: Option<OpenAiConfig>,
    /// Ollama backend settings
    #[serde(default)]
    pub ollama: Option<OllamaConfig>,
}

/// Settings for an OpenAI-compatible backend.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Service base URL, without the `/v1/...` suffix
    pub base_url: String,
    /// Bearer token
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_openai_temperature")]
    pub temperature: f32,
    /// Completion budget per call
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// Settings for a local Ollama server.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    /// Server base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_ollama_temperature")]
    pub temperature: f32,
}
