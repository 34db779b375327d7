//! Backend selection and dispatch.

use crate::config::AiServiceConfig;
use crate::ollama::OllamaClient;
use crate::openai_compat::OpenAiCompatClient;
use async_trait::async_trait;
use feuilleton_core::{GenerateRequest, GenerateResponse};
use feuilleton_error::{ConfigError, FeuilletonResult};
use feuilleton_interface::FeuilletonDriver;
use tracing::info;

/// Supported backend kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// OpenAI-compatible chat completions
    OpenAi,
    /// Local Ollama server
    Ollama,
}

impl BackendKind {
    /// Parse a provider identifier from configuration.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "ollama" => Some(Self::Ollama),
            _ => None,
        }
    }

    /// The canonical identifier for this backend kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Ollama => "ollama",
        }
    }
}

/// Tagged driver enum over all supported backends.
///
/// Construction fails fast on an unknown provider identifier or a missing
/// backend section, so no generation call can start against a
/// half-configured service.
#[derive(Debug, Clone)]
pub enum AnyDriver {
    OpenAi(OpenAiCompatClient),
    Ollama(OllamaClient),
}

impl AnyDriver {
    /// Build the configured backend driver.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the provider identifier is not
    /// recognized or its backend section is absent.
    pub fn from_config(config: &AiServiceConfig) -> FeuilletonResult<Self> {
        let kind = BackendKind::parse(&config.provider).ok_or_else(|| {
            ConfigError::new(format!("Unsupported AI provider: {}", config.provider))
        })?;

        let driver = match kind {
            BackendKind::OpenAi => {
                let settings = config.openai.as_ref().ok_or_else(|| {
                    ConfigError::new("Provider is 'openai' but the openai section is missing")
                })?;
                Self::OpenAi(OpenAiCompatClient::new(
                    settings.api_key.clone(),
                    settings.model.clone(),
                    settings.base_url.clone(),
                    settings.temperature,
                    settings.max_tokens,
                ))
            }
            BackendKind::Ollama => {
                let settings = config.ollama.as_ref().ok_or_else(|| {
                    ConfigError::new("Provider is 'ollama' but the ollama section is missing")
                })?;
                Self::Ollama(OllamaClient::new(
                    settings.model.clone(),
                    settings.base_url.clone(),
                    settings.temperature,
                ))
            }
        };

        info!(provider = kind.as_str(), model = driver.model_name(), "Selected backend");
        Ok(driver)
    }
}

#[async_trait]
impl FeuilletonDriver for AnyDriver {
    async fn generate(&self, req: &GenerateRequest) -> FeuilletonResult<GenerateResponse> {
        match self {
            Self::OpenAi(client) => client.generate(req).await,
            Self::Ollama(client) => client.generate(req).await,
        }
    }

    fn provider_name(&self) -> &'static str {
        match self {
            Self::OpenAi(_) => BackendKind::OpenAi.as_str(),
            Self::Ollama(_) => BackendKind::Ollama.as_str(),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            Self::OpenAi(client) => client.model_name(),
            Self::Ollama(client) => client.model_name(),
        }
    }
}
