//! # ai-cascade
//!
//! Resilient chat completion across multiple independent AI providers.
//!
//! ## Overview
//!
//! This library exposes a single chat capability backed by a fixed, ordered
//! cascade of providers. Each provider speaks its own wire format; the
//! cascade normalizes all of them into one uniform request/response
//! contract. A provider without a credential is skipped outright; a
//! credentialed provider is driven through a bounded retry loop with
//! full-jitter exponential backoff before the cascade moves on. The first
//! provider to answer wins.
//!
//! ## Key Features
//!
//! - **Provider Cascade**: fixed priority order, first-success-wins,
//!   strictly sequential so a healthy primary costs nothing on the rest
//! - **Bounded Retry**: rate limits (429) and server errors (5xx) are
//!   retried with exponential backoff plus uniform jitter; client errors
//!   fail the provider immediately
//! - **Wire Adapters**: one adapter per request/response format family,
//!   selected through the provider registry
//! - **Fail-Closed Parsing**: a 2xx body that does not match the expected
//!   shape is an error, never an empty success
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ai_cascade::{ApiKeys, CascadeClient, Message};
//!
//! #[tokio::main]
//! async fn main() -> ai_cascade::Result<()> {
//!     let keys = ApiKeys::from_env();
//!     let client = CascadeClient::new(keys)?;
//!
//!     let messages = vec![Message::user("Hello, how are you?")];
//!     let reply = client.chat(&messages).await?;
//!     println!("[{}] {}", reply.provider, reply.content);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Static provider table: endpoints, models, format tags |
//! | [`cascade`] | Cascade orchestrator and per-provider retry loop |
//! | [`wire`] | Request serialization / response parsing per format family |
//! | [`transport`] | HTTP transport trait and reqwest implementation |
//! | [`types`] | Core type definitions (messages) |
//! | [`keys`] | Per-provider credential set |

pub mod cascade;
pub mod keys;
pub mod registry;
pub mod transport;
pub mod types;
pub mod wire;

// Re-export main types for convenience
pub use cascade::{
    CascadeClient, CascadeClientBuilder, ChatResponse, GenerationParams, RetryConfig,
};
pub use keys::ApiKeys;
pub use registry::{ProviderDescriptor, ProviderId, WireFormat};
pub use types::message::{Message, MessageRole};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
