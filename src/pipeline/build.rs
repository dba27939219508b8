//! Build phase — the coder's two operations.
//!
//! Single-shot generation from the SRS, and revision from (code, feedback,
//! SRS). Neither validates the response structure; the CODE_START/CODE_END
//! framing is requested by the coder's role instruction, not enforced here.

use crate::agent::{roles, Agent};

use super::PipelineError;

/// Generate the initial code artifact from the SRS.
pub async fn generate(coder: &mut Agent, srs: &str) -> Result<String, PipelineError> {
    let code = coder.respond(&roles::generate_prompt(srs)).await?;
    Ok(code)
}

/// Produce a revised code artifact from the current one plus the critique.
pub async fn revise(
    coder: &mut Agent,
    code: &str,
    feedback: &str,
    srs: &str,
) -> Result<String, PipelineError> {
    let revised = coder
        .respond(&roles::revise_prompt(code, feedback, srs))
        .await?;
    Ok(revised)
}
