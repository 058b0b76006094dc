use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Proxy;

use super::{AuthScheme, Transport, TransportError, WireResponse};

/// Production transport over a shared `reqwest` client.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        // Minimal production-friendly defaults (env-overridable).
        let timeout_secs = env::var("AI_CASCADE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(
                env::var("AI_CASCADE_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            );

        if let Ok(proxy_url) = env::var("AI_CASCADE_PROXY_URL") {
            if let Ok(proxy) = Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        auth: &AuthScheme,
        body: &serde_json::Value,
    ) -> Result<WireResponse, TransportError> {
        let mut req = self.client.post(url).json(body);

        req = match auth {
            AuthScheme::Bearer(credential) => req.bearer_auth(credential),
            AuthScheme::QueryKey(credential) => req.query(&[("key", credential.as_str())]),
        };

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(WireResponse { status, body })
    }
}
