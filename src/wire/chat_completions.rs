//! Generic chat-completions family.
//!
//! Shared by every provider exposing an OpenAI-style `/chat/completions`
//! endpoint: roles pass through as-is, auth is a bearer header, and the
//! reply text sits at `choices[0].message.content`.

use serde_json::{json, Value};

use super::{GenerationParams, WireAdapter, WireError};
use crate::transport::AuthScheme;
use crate::types::message::Message;

pub struct ChatCompletionsAdapter;

impl WireAdapter for ChatCompletionsAdapter {
    fn serialize_request(
        &self,
        model: &str,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Value {
        json!({
            "model": model,
            "messages": messages,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        })
    }

    fn parse_response(&self, body: &str) -> Result<String, WireError> {
        let value: Value = serde_json::from_str(body)?;
        let content = value
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or(WireError::Shape("choices[0].message.content"))?;
        Ok(content.to_string())
    }

    fn auth(&self, credential: &str) -> AuthScheme {
        AuthScheme::Bearer(credential.to_string())
    }
}
