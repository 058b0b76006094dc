//! Wire-format adapters.
//!
//! Every provider belongs to one of a small closed set of format families.
//! A family fixes three things: the request body shape, where the
//! credential goes, and where the reply text sits in the response body.
//! Each family is one [`WireAdapter`] implementation, selected once per
//! provider through its descriptor's [`WireFormat`] tag.
//!
//! Adapters fail closed: a response body that deviates from the expected
//! shape is a [`WireError`], never an empty-string success.

pub mod chat_completions;
pub mod generation;

pub use chat_completions::ChatCompletionsAdapter;
pub use generation::NativeGenerationAdapter;

use crate::registry::WireFormat;
use crate::transport::AuthScheme;
use crate::types::message::Message;

/// Sampling knobs serialized into every request body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 32_768,
            temperature: 0.7,
        }
    }
}

/// Request serialization and response parsing for one format family.
pub trait WireAdapter: Send + Sync {
    /// Build the JSON request body for `messages` against `model`.
    fn serialize_request(
        &self,
        model: &str,
        messages: &[Message],
        params: &GenerationParams,
    ) -> serde_json::Value;

    /// Extract the normalized reply text from a 2xx response body.
    fn parse_response(&self, body: &str) -> Result<String, WireError>;

    /// Where this family places the credential.
    fn auth(&self, credential: &str) -> AuthScheme;
}

/// Select the adapter for a format family.
pub fn adapter_for(format: WireFormat) -> &'static dyn WireAdapter {
    match format {
        WireFormat::ChatCompletions => &ChatCompletionsAdapter,
        WireFormat::NativeGeneration => &NativeGenerationAdapter,
    }
}

/// Shape violation in an otherwise-successful response.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing or malformed field: {0}")]
    Shape(&'static str),
}
