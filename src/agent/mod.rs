//! Agent handle — a named role bound to a fixed system instruction.
//!
//! One handle per role, created once per run. The handle owns the only
//! mutable accounting state in the pipeline: its cumulative token counter,
//! updated solely by [`Agent::respond`] and monotonically non-decreasing.

pub mod classify;
pub mod roles;

use std::sync::Arc;

use crate::llm::{CompletionBackend, LlmError};

/// A role-specialized conversational agent.
pub struct Agent {
    name: String,
    instruction: String,
    backend: Arc<dyn CompletionBackend>,
    total_tokens: u64,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        instruction: impl Into<String>,
        backend: Arc<dyn CompletionBackend>,
    ) -> Self {
        Self {
            name: name.into(),
            instruction: instruction.into(),
            backend,
            total_tokens: 0,
        }
    }

    /// Send a prompt under this agent's role instruction and return the
    /// response text unmodified. Bills the call's token count against the
    /// handle. Inference failure (including missing usage metadata) is fatal
    /// to the run and propagates untouched.
    pub async fn respond(&mut self, prompt: &str) -> Result<String, LlmError> {
        let completion = self.backend.complete(&self.instruction, prompt).await?;
        self.total_tokens += completion.tokens;

        tracing::debug!(
            agent = %self.name,
            tokens = completion.tokens,
            total = self.total_tokens,
            "agent responded"
        );

        Ok(completion.text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokens billed across all calls made through this handle.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }
}
