//! Scripted completion backend for deterministic runs.
//!
//! Replies are played back in order regardless of which agent asks; because
//! the pipeline is strictly sequential, a single script pins down the exact
//! call order. Every call is logged with its system instruction so tests can
//! count calls per role.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Completion, CompletionBackend, LlmError};

/// A recorded call: (system instruction, prompt).
pub type RecordedCall = (String, String);

/// Plays back a fixed list of replies, recording every call.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Completion>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply with an explicit token count.
    pub fn push(&self, text: &str, tokens: u64) {
        self.replies.lock().unwrap().push_back(Completion {
            text: text.to_string(),
            tokens,
        });
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls whose system instruction matched `system`.
    pub fn calls_for(&self, system: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| s == system)
            .count()
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, system: &str, prompt: &str) -> Result<Completion, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| LlmError::InvalidResponse("script exhausted".into()))
    }
}
