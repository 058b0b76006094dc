use crate::registry::ProviderId;
use crate::transport::TransportError;
use thiserror::Error;

/// Unified error type for the cascade runtime.
///
/// Failures below the cascade level (a single attempt against a single
/// provider) are represented here too, but they are consumed inside the
/// delivery loop; callers of [`crate::CascadeClient::chat`] only ever
/// observe [`Error::Exhausted`].
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure before any HTTP status was obtained.
    #[error("network transport error: {0}")]
    Transport(#[from] TransportError),

    /// The provider answered with a non-2xx status.
    #[error("provider {provider} returned HTTP {status}: {message}")]
    Remote {
        provider: ProviderId,
        status: u16,
        message: String,
        retryable: bool,
    },

    /// The provider answered 2xx but the body did not match the shape its
    /// wire format promises.
    #[error("could not parse response from provider {provider}: {reason}")]
    Parse { provider: ProviderId, reason: String },

    /// Every provider in the cascade was skipped or terminally failed.
    #[error("all AI providers failed; check your API keys and network connection")]
    Exhausted,
}

impl Error {
    /// Build a [`Error::Remote`] with its retryability derived from the status.
    pub fn remote(provider: ProviderId, status: u16, message: impl Into<String>) -> Self {
        Error::Remote {
            provider,
            status,
            message: message.into(),
            retryable: is_retryable_status(status),
        }
    }

    /// Whether the delivery loop may try the same provider again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Remote { retryable: true, .. })
    }
}

/// HTTP 429 and any 5xx are transient; every other non-2xx status is
/// terminal for the provider.
pub(crate) fn is_retryable_status(status: u16) -> bool {
    status == 429 || (500..=599).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_statuses() {
        for status in [429, 500, 502, 503, 599] {
            assert!(
                is_retryable_status(status),
                "status {} should be retryable",
                status
            );
        }
    }

    #[test]
    fn fatal_statuses() {
        for status in [400, 401, 403, 404, 409, 418, 422] {
            assert!(
                !is_retryable_status(status),
                "status {} should NOT be retryable",
                status
            );
        }
    }

    #[test]
    fn remote_error_carries_classification() {
        let err = Error::remote(ProviderId::Groq, 429, "rate limited");
        assert!(err.is_retryable());

        let err = Error::remote(ProviderId::Groq, 401, "bad key");
        assert!(!err.is_retryable());
    }
}
