//! Verify-revise loop — bounded critique and repair cycle.
//!
//! Each iteration: one verify call, classify, then either accept, revise and
//! go again, or stop. A revise call is only spent when another verify could
//! still observe its result, so the final failing verify is never followed
//! by a revision.

use crate::agent::classify::{verdict, Verdict};
use crate::agent::{roles, Agent};
use crate::console::Progress;

use super::{build, PipelineError};

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// A critique passed; the current artifact is final.
    Accept,
    /// The iteration budget ran out on a failing critique; the last
    /// artifact is returned flagged for manual review.
    Exhausted,
}

/// Run the loop. Consumes the candidate code and returns the final artifact
/// together with how the loop ended.
pub async fn run(
    tester: &mut Agent,
    coder: &mut Agent,
    mut code: String,
    srs: &str,
    progress: &dyn Progress,
    max_iterations: usize,
) -> Result<(String, LoopOutcome), PipelineError> {
    for iteration in 1..=max_iterations {
        progress.emit(&format!(
            "\n=== Testing Iteration {iteration}/{max_iterations} ==="
        ));

        let critique = tester.respond(&roles::test_prompt(&code, srs)).await?;
        progress.emit(&format!("\nTest Results:\n{critique}"));

        match verdict(&critique) {
            Verdict::Passed => {
                tracing::info!(iteration, "critique passed");
                return Ok((code, LoopOutcome::Accept));
            }
            Verdict::Failed if iteration < max_iterations => {
                tracing::info!(iteration, "critique failed, revising");
                progress.emit(&format!("\n=== Revising Code (Iteration {iteration}) ==="));
                code = build::revise(coder, &code, &critique, srs).await?;
                progress.emit(&code);
            }
            Verdict::Failed => {
                tracing::warn!(max_iterations, "iteration budget exhausted");
            }
        }
    }

    Ok((code, LoopOutcome::Exhausted))
}
