//! Inference backend — the seam between the pipeline and the hosted model.
//!
//! Phases talk to a [`CompletionBackend`] capability, never to a concrete
//! client. The real backend is [`AnthropicClient`]; [`scripted::ScriptedBackend`]
//! drives deterministic runs in tests.

pub mod client;
pub mod scripted;
pub mod types;

use async_trait::async_trait;

pub use client::{AnthropicClient, LlmError};

/// One completed inference call: response text plus billed tokens.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub tokens: u64,
}

/// Capability to turn (system instruction, prompt) into a completion.
///
/// Every successful call reports a token count; a backend that cannot
/// produce one must fail the call instead.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<Completion, LlmError>;
}
