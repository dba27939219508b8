//! Requirements phase — bounded Q&A until an SRS document appears.
//!
//! State machine: AwaitingInitialInput → Questioning → ArtifactReady.
//! Termination is guaranteed: at most `max_interactions` questioning calls,
//! plus one forced-summary call when the analyst never volunteers the
//! sentinel. The forced summary is accepted as the artifact whether or not
//! it carries the sentinel prefix.

use crate::agent::classify::{srs_signal, SrsSignal};
use crate::agent::{roles, Agent};
use crate::console::{Progress, UserInput};
use crate::conversation::{Conversation, Speaker};

use super::PipelineError;

/// Run the requirements interview and return the SRS artifact.
pub async fn gather(
    analyst: &mut Agent,
    input: &mut dyn UserInput,
    progress: &dyn Progress,
    max_interactions: usize,
) -> Result<String, PipelineError> {
    let mut conversation = Conversation::new();

    progress.emit(roles::ANALYST_GREETING);
    conversation.push(Speaker::Analyst, roles::ANALYST_GREETING);

    let purpose = input.read_line("> ")?;
    conversation.push(Speaker::User, purpose);

    for round in 0..max_interactions {
        let prompt = roles::questioning_prompt(&conversation.render());
        let response = analyst.respond(&prompt).await?;

        if srs_signal(&response) == SrsSignal::Ready {
            tracing::info!(round, "requirements complete");
            return Ok(response);
        }

        // On the last budgeted round there is no point asking the user
        // another question the analyst will never see answered.
        if round + 1 < max_interactions {
            progress.emit(&format!("\nRA: {response}"));
            conversation.push(Speaker::Analyst, response);

            let reply = input.read_line("\nYour response: ")?;
            conversation.push(Speaker::User, reply);
        }
    }

    tracing::info!(max_interactions, "interaction budget spent, forcing summary");
    let response = analyst
        .respond(&roles::forced_summary_prompt(&conversation.render()))
        .await?;
    progress.emit(&format!("\nRA: {response}"));

    // Accepted as-is, sentinel or not. Best effort beats never terminating.
    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::console::{NullProgress, ScriptedInput};
    use crate::llm::scripted::ScriptedBackend;

    fn analyst(backend: &Arc<ScriptedBackend>) -> Agent {
        Agent::new(roles::ANALYST_NAME, roles::ANALYST_ROLE, backend.clone())
    }

    #[tokio::test]
    async fn immediate_sentinel_ends_after_one_call() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push("SRS_DOCUMENT:\nPurpose: X\nFeatures: Y", 5);

        let mut agent = analyst(&backend);
        let mut input = ScriptedInput::new(["a calculator"]);

        let srs = gather(&mut agent, &mut input, &NullProgress, 5).await.unwrap();

        assert_eq!(srs, "SRS_DOCUMENT:\nPurpose: X\nFeatures: Y");
        assert_eq!(backend.calls().len(), 1);
        // Only the initial purpose was solicited.
        assert_eq!(input.reads(), 1);
    }

    #[tokio::test]
    async fn questioning_appends_turns_and_solicits_user() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push("What platforms must it run on?", 5);
        backend.push("SRS_DOCUMENT:\nPurpose: calc\nFeatures: add", 5);

        let mut agent = analyst(&backend);
        let mut input = ScriptedInput::new(["a calculator", "just the terminal"]);

        let srs = gather(&mut agent, &mut input, &NullProgress, 5).await.unwrap();

        assert!(srs.starts_with("SRS_DOCUMENT:"));
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(input.reads(), 2);

        // The second prompt carries the whole transcript including the answer.
        let (_, second_prompt) = &backend.calls()[1];
        assert!(second_prompt.contains("What platforms must it run on?"));
        assert!(second_prompt.contains("User: just the terminal"));
    }

    #[tokio::test]
    async fn budget_exhaustion_forces_exactly_one_summary() {
        let backend = Arc::new(ScriptedBackend::new());
        for _ in 0..5 {
            backend.push("And another question?", 5);
        }
        backend.push("Purpose: guessed\nFeatures: guessed", 5);

        let mut agent = analyst(&backend);
        // Initial purpose + one answer per non-final round.
        let mut input = ScriptedInput::new(["game", "a", "b", "c", "d"]);

        let srs = gather(&mut agent, &mut input, &NullProgress, 5).await.unwrap();

        // 5 questioning calls + 1 forced summary.
        assert_eq!(backend.calls().len(), 6);
        assert_eq!(input.reads(), 5);
        // Accepted verbatim despite the missing sentinel.
        assert_eq!(srs, "Purpose: guessed\nFeatures: guessed");

        let (_, summary_prompt) = &backend.calls()[5];
        assert!(summary_prompt.contains("maximum number of interactions"));
    }

    #[tokio::test]
    async fn mid_text_sentinel_does_not_terminate() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push("I could write an SRS_DOCUMENT: now, ok?", 5);
        backend.push("SRS_DOCUMENT:\nPurpose: p\nFeatures: f", 5);

        let mut agent = analyst(&backend);
        let mut input = ScriptedInput::new(["tool", "yes"]);

        let srs = gather(&mut agent, &mut input, &NullProgress, 5).await.unwrap();
        assert!(srs.starts_with("SRS_DOCUMENT:"));
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn inference_failure_aborts_the_phase() {
        let backend = Arc::new(ScriptedBackend::new());
        // No replies: first analyst call fails.
        let mut agent = analyst(&backend);
        let mut input = ScriptedInput::new(["purpose"]);

        let err = gather(&mut agent, &mut input, &NullProgress, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Inference(_)));
    }
}
