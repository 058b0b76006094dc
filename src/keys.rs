//! Per-provider credential set.

use std::env;

use keyring::Entry;

use crate::registry::ProviderId;

/// One secret string per provider.
///
/// An empty string means "provider unavailable": the cascade skips that
/// provider without spending a network call or any retry budget. The set is
/// immutable for the lifetime of a [`crate::CascadeClient`].
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub cerebras: String,
    pub gemini: String,
    pub groq: String,
    pub mistral: String,
    pub nvidia: String,
    /// Doubles as the account id embedded in the request path.
    pub cloudflare: String,
}

impl ApiKeys {
    /// Resolve every provider's credential from the OS keyring (service
    /// `ai-cascade`, account = provider id), falling back to the
    /// `<PROVIDER>_API_KEY` environment variable. Providers with neither
    /// resolve to empty strings and are skipped by the cascade.
    pub fn from_env() -> Self {
        Self {
            cerebras: resolve_key(ProviderId::Cerebras),
            gemini: resolve_key(ProviderId::Gemini),
            groq: resolve_key(ProviderId::Groq),
            mistral: resolve_key(ProviderId::Mistral),
            nvidia: resolve_key(ProviderId::Nvidia),
            cloudflare: resolve_key(ProviderId::Cloudflare),
        }
    }

    pub fn key_for(&self, id: ProviderId) -> &str {
        match id {
            ProviderId::Cerebras => &self.cerebras,
            ProviderId::Gemini => &self.gemini,
            ProviderId::Groq => &self.groq,
            ProviderId::Mistral => &self.mistral,
            ProviderId::Nvidia => &self.nvidia,
            ProviderId::Cloudflare => &self.cloudflare,
        }
    }
}

fn resolve_key(id: ProviderId) -> String {
    // 1. Try keyring
    if let Ok(entry) = Entry::new("ai-cascade", id.as_str()) {
        if let Ok(key) = entry.get_password() {
            return key;
        }
    }

    // 2. Try environment variable (PROVIDER_API_KEY)
    env_key(id).unwrap_or_default()
}

fn env_key(id: ProviderId) -> Option<String> {
    let env_var = format!("{}_API_KEY", id.as_str().to_uppercase());
    env::var(env_var).ok()
}
