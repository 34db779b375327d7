//! Type conversions between Feuilleton and OpenAI formats.

use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse};
use feuilleton_core::{GenerateRequest, GenerateResponse, Role};
use feuilleton_error::{BackendError, FeuilletonResult, JsonError};

/// Converts a Feuilleton GenerateRequest to OpenAI chat format.
pub fn to_chat_request(req: &GenerateRequest, model: &str) -> FeuilletonResult<ChatRequest> {
    let messages = req
        .messages
        .iter()
        .map(|msg| {
            let role = match msg.role() {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => "system",
            };
            ChatMessage {
                role: role.to_string(),
                content: msg.content().clone(),
            }
        })
        .collect::<Vec<_>>();

    let mut builder = ChatRequest::builder();
    builder.model(model.to_string()).messages(messages);

    if let Some(max_tokens) = req.max_tokens {
        builder.max_tokens(max_tokens);
    }

    if let Some(temp) = req.temperature {
        builder.temperature(temp);
    }

    builder
        .build()
        .map_err(|e| BackendError::new(format!("Failed to build request: {}", e)).into())
}

/// Converts an OpenAI chat response to a Feuilleton GenerateResponse.
pub fn from_chat_response(response: &ChatResponse) -> FeuilletonResult<GenerateResponse> {
    let text = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| JsonError::new("No choices in response"))?;

    Ok(GenerateResponse { text })
}
