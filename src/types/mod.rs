//! Core type definitions shared across the cascade.

pub mod message;

pub use message::{Message, MessageRole};
