//! Static provider registry.
//!
//! One [`ProviderDescriptor`] per provider, held as `'static` data built
//! into the binary. The table is read-only: concurrent cascade invocations
//! read it without synchronization. Cascade priority is the order of
//! [`cascade`], fixed at build time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a configured provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Cerebras,
    Gemini,
    Groq,
    Mistral,
    Nvidia,
    Cloudflare,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Cerebras => "cerebras",
            ProviderId::Gemini => "gemini",
            ProviderId::Groq => "groq",
            ProviderId::Mistral => "mistral",
            ProviderId::Nvidia => "nvidia",
            ProviderId::Cloudflare => "cloudflare",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire-format family: the request/response JSON shape plus the auth
/// placement convention shared by a group of providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// `{model, messages, ...}` request, bearer-token auth, response text
    /// under `choices[0].message.content`.
    ChatCompletions,
    /// `{contents, generationConfig}` request, credential as a `key` query
    /// parameter, response text under `candidates[0].content.parts[0].text`.
    NativeGeneration,
}

/// Everything the orchestrator needs to know about one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub id: ProviderId,
    pub base_url: &'static str,
    /// Endpoint path appended to `base_url`.
    pub path: &'static str,
    pub format: WireFormat,
    /// Model identifier requested from this provider.
    pub model: &'static str,
    /// The provider addresses the account as a URL path segment rather than
    /// through a header; `{account_id}` in `base_url` is substituted with
    /// the provider's credential before dispatch.
    pub account_in_path: bool,
}

impl ProviderDescriptor {
    /// Full request URL for this provider, with the account segment
    /// substituted where the descriptor calls for it.
    pub fn request_url(&self, credential: &str) -> String {
        let url = format!("{}{}", self.base_url, self.path);
        if self.account_in_path {
            url.replace("{account_id}", credential)
        } else {
            url
        }
    }
}

/// Fixed cascade order. Providers are tried front to back.
const CASCADE: [ProviderDescriptor; 6] = [
    ProviderDescriptor {
        id: ProviderId::Cerebras,
        base_url: "https://api.cerebras.ai/v1",
        path: "/chat/completions",
        format: WireFormat::ChatCompletions,
        model: "qwen-3-235b-a22b-instruct-2507",
        account_in_path: false,
    },
    ProviderDescriptor {
        id: ProviderId::Gemini,
        base_url: "https://generativelanguage.googleapis.com/v1beta",
        path: "/models/gemma-3-27b-instruct:generateContent",
        format: WireFormat::NativeGeneration,
        model: "gemma-3-27b-instruct",
        account_in_path: false,
    },
    ProviderDescriptor {
        id: ProviderId::Groq,
        base_url: "https://api.groq.com/openai/v1",
        path: "/chat/completions",
        format: WireFormat::ChatCompletions,
        model: "llama-3.1-405b-instruct",
        account_in_path: false,
    },
    ProviderDescriptor {
        id: ProviderId::Mistral,
        base_url: "https://api.mistral.ai/v1",
        path: "/chat/completions",
        format: WireFormat::ChatCompletions,
        model: "mistral-large",
        account_in_path: false,
    },
    ProviderDescriptor {
        id: ProviderId::Nvidia,
        base_url: "https://integrate.api.nvidia.com/v1",
        path: "/chat/completions",
        format: WireFormat::ChatCompletions,
        model: "meta-llama/llama-3.1-405b-instruct",
        account_in_path: false,
    },
    ProviderDescriptor {
        id: ProviderId::Cloudflare,
        // The account segment is part of the path on this provider.
        base_url: "https://api.cloudflare.com/client/v4/accounts/{account_id}/ai/run",
        path: "/@cf/meta/llama-3.1-405b-instruct",
        format: WireFormat::ChatCompletions,
        model: "@cf/meta/llama-3.1-405b-instruct",
        account_in_path: true,
    },
];

/// The full provider table in cascade priority order.
pub fn cascade() -> &'static [ProviderDescriptor] {
    &CASCADE
}

/// Look up the descriptor for a provider. Total over [`ProviderId`].
pub fn describe(id: ProviderId) -> &'static ProviderDescriptor {
    CASCADE
        .iter()
        .find(|d| d.id == id)
        .expect("every ProviderId has a cascade entry")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_is_total() {
        for id in [
            ProviderId::Cerebras,
            ProviderId::Gemini,
            ProviderId::Groq,
            ProviderId::Mistral,
            ProviderId::Nvidia,
            ProviderId::Cloudflare,
        ] {
            assert_eq!(describe(id).id, id);
        }
    }

    #[test]
    fn cascade_order_is_fixed() {
        let order: Vec<ProviderId> = cascade().iter().map(|d| d.id).collect();
        assert_eq!(
            order,
            vec![
                ProviderId::Cerebras,
                ProviderId::Gemini,
                ProviderId::Groq,
                ProviderId::Mistral,
                ProviderId::Nvidia,
                ProviderId::Cloudflare,
            ]
        );
    }

    #[test]
    fn account_substitution_only_where_flagged() {
        let cf = describe(ProviderId::Cloudflare);
        assert!(cf.account_in_path);
        assert_eq!(
            cf.request_url("acct-123"),
            "https://api.cloudflare.com/client/v4/accounts/acct-123/ai/run/@cf/meta/llama-3.1-405b-instruct"
        );

        let groq = describe(ProviderId::Groq);
        assert!(!groq.account_in_path);
        assert_eq!(
            groq.request_url("ignored"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn gemini_is_the_only_native_generation_provider() {
        let natives: Vec<ProviderId> = cascade()
            .iter()
            .filter(|d| d.format == WireFormat::NativeGeneration)
            .map(|d| d.id)
            .collect();
        assert_eq!(natives, vec![ProviderId::Gemini]);
    }
}
