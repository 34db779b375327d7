//! Ollama local-model client.

mod client;
mod dto;

pub use client::OllamaClient;
pub use dto::{OllamaRequest, OllamaResponse};
