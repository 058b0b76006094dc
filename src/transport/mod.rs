//! HTTP transport seam.
//!
//! The cascade needs exactly one capability from the network: send a JSON
//! POST, get back a status code and a body. That capability is the
//! [`Transport`] trait; [`HttpTransport`] is the production implementation
//! over `reqwest`, and tests substitute in-memory implementations.

pub mod http;

pub use http::HttpTransport;

use async_trait::async_trait;

/// Credential placement for one request, decided by the wire-format family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <credential>` header.
    Bearer(String),
    /// `key=<credential>` query parameter.
    QueryKey(String),
}

/// Status and body of one completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

impl WireResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal outbound HTTP capability.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url` with the given credential placement.
    ///
    /// Non-2xx statuses are returned as normal [`WireResponse`]s so the
    /// caller can classify them; `Err` means no HTTP exchange completed at
    /// all (DNS, connect, timeout).
    async fn post_json(
        &self,
        url: &str,
        auth: &AuthScheme,
        body: &serde_json::Value,
    ) -> Result<WireResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}
