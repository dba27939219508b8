//! Pipeline configuration — the two iteration bounds plus model settings.

/// Default cap on requirements-gathering interactions.
pub const DEFAULT_MAX_INTERACTIONS: usize = 5;

/// Default cap on verify-revise iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 3;

/// Default model alias sent to the API.
pub const DEFAULT_MODEL: &str = "sonnet";

/// Default per-response token ceiling.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Bounds and model settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum requirements-gathering interactions before the forced summary.
    pub max_interactions: usize,
    /// Maximum verify-revise iterations before the run is flagged for review.
    pub max_iterations: usize,
    /// Model alias or full model ID.
    pub model: String,
    /// Per-response token ceiling.
    pub max_tokens: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_interactions: DEFAULT_MAX_INTERACTIONS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            model: DEFAULT_MODEL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_bounds() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_interactions, 5);
        assert_eq!(config.max_iterations, 3);
        assert_eq!(config.model, "sonnet");
        assert_eq!(config.max_tokens, 4096);
    }
}
