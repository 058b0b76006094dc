//! Native generation family.
//!
//! The request wraps each message in a content block with a single text
//! part, the `assistant` role is renamed to `model`, the credential travels
//! as a `key` query parameter, and the reply text sits at
//! `candidates[0].content.parts[0].text`.

use serde_json::{json, Value};

use super::{GenerationParams, WireAdapter, WireError};
use crate::transport::AuthScheme;
use crate::types::message::{Message, MessageRole};

pub struct NativeGenerationAdapter;

impl WireAdapter for NativeGenerationAdapter {
    fn serialize_request(
        &self,
        _model: &str,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Value {
        // The model is addressed through the endpoint path, not the body.
        let contents: Vec<Value> = messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    MessageRole::Assistant => "model",
                    MessageRole::User => "user",
                    MessageRole::System => "system",
                };
                json!({
                    "role": role,
                    "parts": [{"text": m.content}],
                })
            })
            .collect();

        json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": params.max_tokens,
                "temperature": params.temperature,
            },
        })
    }

    fn parse_response(&self, body: &str) -> Result<String, WireError> {
        let value: Value = serde_json::from_str(body)?;
        let text = value
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .ok_or(WireError::Shape("candidates[0].content.parts[0].text"))?;
        Ok(text.to_string())
    }

    fn auth(&self, credential: &str) -> AuthScheme {
        AuthScheme::QueryKey(credential.to_string())
    }
}
