//! Cascade orchestrator.
//!
//! Walks the fixed provider order from [`crate::registry`], skipping
//! providers without a credential, and drives each remaining provider
//! through a bounded retry loop with full-jitter exponential backoff. The
//! first provider to produce a parsed reply wins; a provider that exhausts
//! its retries or hits a fatal error is abandoned and the cascade moves on.
//! Only total exhaustion surfaces to the caller.
//!
//! Providers are tried strictly one at a time, so a healthy early provider
//! costs nothing on the later ones. Within one `chat` call the only
//! suspension points are the in-flight request and the backoff sleep; both
//! yield to other concurrent invocations.

mod backoff;

pub use backoff::RetryConfig;

pub use crate::wire::GenerationParams;

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::Error;
use crate::keys::ApiKeys;
use crate::registry::{self, ProviderDescriptor, ProviderId};
use crate::transport::{HttpTransport, Transport};
use crate::types::message::Message;
use crate::wire;
use crate::Result;

/// A successful cascade outcome: the normalized reply text and the provider
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub content: String,
    pub provider: ProviderId,
}

/// Chat client that cascades across all configured providers.
///
/// All state is read-only after construction, so a single client can serve
/// any number of concurrent [`chat`](CascadeClient::chat) calls without
/// synchronization.
pub struct CascadeClient {
    keys: ApiKeys,
    transport: Arc<dyn Transport>,
    retry: RetryConfig,
    params: GenerationParams,
}

impl CascadeClient {
    /// Client over the production HTTP transport with default retry policy.
    pub fn new(keys: ApiKeys) -> Result<Self> {
        Self::builder().api_keys(keys).build()
    }

    pub fn builder() -> CascadeClientBuilder {
        CascadeClientBuilder::new()
    }

    /// Send `messages` through the provider cascade.
    ///
    /// Providers are tried strictly in cascade order; the first one to
    /// answer ends the cascade. Per-provider failures are logged and
    /// swallowed here — the only error this method returns is
    /// [`Error::Exhausted`].
    pub async fn chat(&self, messages: &[Message]) -> Result<ChatResponse> {
        for descriptor in registry::cascade() {
            let credential = self.keys.key_for(descriptor.id);
            if credential.is_empty() {
                warn!(provider = %descriptor.id, "skipping provider: no API key configured");
                continue;
            }

            match self.deliver(descriptor, messages, credential).await {
                Ok(content) => {
                    info!(provider = %descriptor.id, "provider answered");
                    return Ok(ChatResponse {
                        content,
                        provider: descriptor.id,
                    });
                }
                Err(err) => {
                    error!(provider = %descriptor.id, error = %err, "provider failed, trying next");
                }
            }
        }

        Err(Error::Exhausted)
    }

    /// Drive one provider through the bounded retry loop.
    ///
    /// 2xx leads to parsing, whose failure is fatal for the provider.
    /// 429 and 5xx are retried with backoff until the attempt bound; any
    /// other status or a transport-level failure ends the provider on the
    /// spot.
    async fn deliver(
        &self,
        descriptor: &ProviderDescriptor,
        messages: &[Message],
        credential: &str,
    ) -> Result<String> {
        let adapter = wire::adapter_for(descriptor.format);
        let url = descriptor.request_url(credential);
        let auth = adapter.auth(credential);
        let body = adapter.serialize_request(descriptor.model, messages, &self.params);

        let mut attempt = 0u32;
        loop {
            let response = self.transport.post_json(&url, &auth, &body).await?;
            let status = response.status;

            if response.is_success() {
                return adapter
                    .parse_response(&response.body)
                    .map_err(|e| Error::Parse {
                        provider: descriptor.id,
                        reason: e.to_string(),
                    });
            }

            let err = Error::remote(descriptor.id, status, response.body);
            if !err.is_retryable() {
                return Err(err);
            }

            attempt += 1;
            if attempt >= self.retry.max_attempts {
                return Err(err);
            }

            let delay = self.retry.backoff(attempt - 1);
            warn!(
                provider = %descriptor.id,
                status,
                delay_ms = delay.as_millis() as u64,
                "transient provider error, backing off"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`CascadeClient`].
#[derive(Default)]
pub struct CascadeClientBuilder {
    keys: ApiKeys,
    transport: Option<Arc<dyn Transport>>,
    retry: RetryConfig,
    params: GenerationParams,
}

impl CascadeClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_keys(mut self, keys: ApiKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn generation_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Replace the outbound transport. The default is [`HttpTransport`];
    /// tests substitute in-memory implementations here.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<CascadeClient> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new()?),
        };

        Ok(CascadeClient {
            keys: self.keys,
            transport,
            retry: self.retry,
            params: self.params,
        })
    }
}
