//! Text-generation backend clients for Feuilleton.
//!
//! Two backends are supported: any OpenAI-compatible chat completions
//! service and a local Ollama server. Both are plain HTTP+JSON round trips —
//! no streaming, no retries. [`AnyDriver`] selects between them from the
//! `ai_service` configuration block.

mod backend;
mod config;
pub mod ollama;
pub mod openai_compat;

pub use backend::{AnyDriver, BackendKind};
pub use config::{AiServiceConfig, OllamaConfig, OpenAiConfig};
