//! Pipeline orchestrator — requirements, build, verify-revise, in order.
//!
//! Owns the three agent handles for the run's lifetime, sequences the
//! phases, and folds each handle's cumulative token count into the final
//! usage report. Only inference failure aborts a run; a spent verify budget
//! degrades to a final artifact flagged for manual review.

pub mod build;
pub mod requirements;
pub mod verify;

use std::sync::Arc;

use crate::agent::{roles, Agent};
use crate::config::PipelineConfig;
use crate::console::{Progress, UserInput};
use crate::llm::{CompletionBackend, LlmError};

pub use verify::LoopOutcome;

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("inference failed: {0}")]
    Inference(#[from] LlmError),

    #[error("user input failed: {0}")]
    Input(#[from] std::io::Error),
}

/// Final status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The tester accepted the artifact.
    Accepted,
    /// The verify budget ran out; the artifact needs manual review.
    NeedsReview,
}

/// Per-role token totals, keyed by role name.
#[derive(Debug, Clone, Default)]
pub struct UsageReport {
    entries: Vec<(String, u64)>,
}

impl UsageReport {
    fn record(&mut self, agent: &Agent) {
        self.entries
            .push((agent.name().to_string(), agent.total_tokens()));
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn tokens_for(&self, role: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, tokens)| *tokens)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, tokens)| tokens).sum()
    }
}

/// Everything a finished run produces.
#[derive(Debug)]
pub struct RunOutcome {
    /// The final code artifact.
    pub code: String,
    /// The requirements artifact it was built against.
    pub srs: String,
    pub status: RunStatus,
    pub usage: UsageReport,
}

/// The three-agent pipeline.
pub struct Pipeline {
    analyst: Agent,
    coder: Agent,
    tester: Agent,
    config: PipelineConfig,
}

impl Pipeline {
    /// Build the three agent handles over a shared backend.
    pub fn new(backend: Arc<dyn CompletionBackend>, config: PipelineConfig) -> Self {
        Self {
            analyst: Agent::new(roles::ANALYST_NAME, roles::ANALYST_ROLE, backend.clone()),
            coder: Agent::new(roles::CODER_NAME, roles::CODER_ROLE, backend.clone()),
            tester: Agent::new(roles::TESTER_NAME, roles::TESTER_ROLE, backend),
            config,
        }
    }

    /// Run the full pipeline: gather requirements, generate code, then
    /// verify and revise until acceptance or exhaustion.
    pub async fn run(
        mut self,
        input: &mut dyn UserInput,
        progress: &dyn Progress,
    ) -> Result<RunOutcome, PipelineError> {
        progress.emit("\n=== Starting Software Development Process ===\n");

        let srs = requirements::gather(
            &mut self.analyst,
            input,
            progress,
            self.config.max_interactions,
        )
        .await?;
        progress.emit("\n=== Requirements Gathered ===");

        progress.emit("\n=== Generating Code ===");
        let code = build::generate(&mut self.coder, &srs).await?;
        progress.emit(&code);

        let (code, loop_outcome) = verify::run(
            &mut self.tester,
            &mut self.coder,
            code,
            &srs,
            progress,
            self.config.max_iterations,
        )
        .await?;

        let status = match loop_outcome {
            LoopOutcome::Accept => {
                progress.emit("\n=== Development Successfully Completed ===");
                RunStatus::Accepted
            }
            LoopOutcome::Exhausted => {
                progress.emit(
                    "\n=== Maximum iterations reached. Final version may need manual review ===",
                );
                RunStatus::NeedsReview
            }
        };

        let mut usage = UsageReport::default();
        usage.record(&self.analyst);
        usage.record(&self.coder);
        usage.record(&self.tester);

        progress.emit("\n=== Token Usage ===");
        for (role, tokens) in usage.entries() {
            progress.emit(&format!("{role} token usage: {tokens}"));
        }

        Ok(RunOutcome {
            code,
            srs,
            status,
            usage,
        })
    }
}
