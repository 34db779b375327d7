//! Generic OpenAI-compatible API client.
//!
//! This module provides a reusable client for any API that follows the OpenAI
//! chat completions format.

mod client;
mod conversions;
mod dto;

pub use client::OpenAiCompatClient;
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
