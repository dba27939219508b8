//! Sentinel classification — free-form model output mapped to closed enums.
//!
//! The substring policies live here and nowhere else, so a sentinel wording
//! change touches exactly one module.

/// Marks a complete requirements document (exact, case-sensitive prefix).
pub const SRS_SENTINEL: &str = "SRS_DOCUMENT:";

/// Marks a failing critique (substring, case-sensitive).
pub const TEST_FAILED_SENTINEL: &str = "TEST_FAILED:";

/// Marks a passing critique (substring, case-sensitive).
pub const TEST_PASSED_SENTINEL: &str = "TEST_PASSED:";

/// Code-artifact delimiters. Requested of the coder's output format but
/// never enforced by the pipeline.
pub const CODE_START: &str = "CODE_START";
pub const CODE_END: &str = "CODE_END";

/// Whether an analyst response is a finished requirements document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrsSignal {
    Ready,
    NotReady,
}

/// Classify an analyst response. Only an exact `SRS_DOCUMENT:` prefix counts;
/// the sentinel appearing mid-text does not.
pub fn srs_signal(text: &str) -> SrsSignal {
    if text.starts_with(SRS_SENTINEL) {
        SrsSignal::Ready
    } else {
        SrsSignal::NotReady
    }
}

/// Outcome of a tester critique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

/// Classify a tester critique.
///
/// Permissive policy: anything that does not contain `TEST_FAILED:` passes,
/// including responses carrying neither sentinel. A critique containing both
/// sentinels fails.
pub fn verdict(text: &str) -> Verdict {
    if text.contains(TEST_FAILED_SENTINEL) {
        Verdict::Failed
    } else {
        Verdict::Passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srs_prefix_is_ready() {
        assert_eq!(
            srs_signal("SRS_DOCUMENT:\nPurpose: X\nFeatures: Y"),
            SrsSignal::Ready
        );
    }

    #[test]
    fn srs_mid_text_is_not_ready() {
        assert_eq!(
            srs_signal("Here is the SRS_DOCUMENT: you asked for"),
            SrsSignal::NotReady
        );
    }

    #[test]
    fn srs_is_case_sensitive() {
        assert_eq!(srs_signal("srs_document: lowercase"), SrsSignal::NotReady);
    }

    #[test]
    fn srs_leading_whitespace_is_not_ready() {
        assert_eq!(srs_signal(" SRS_DOCUMENT: padded"), SrsSignal::NotReady);
    }

    #[test]
    fn failed_sentinel_fails() {
        assert_eq!(
            verdict("TEST_FAILED:\n- missing error handling"),
            Verdict::Failed
        );
        // Substring match, not prefix.
        assert_eq!(
            verdict("Review complete. TEST_FAILED: two issues."),
            Verdict::Failed
        );
    }

    #[test]
    fn passed_sentinel_passes() {
        assert_eq!(verdict("TEST_PASSED:\nAll requirements met."), Verdict::Passed);
    }

    #[test]
    fn neither_sentinel_passes() {
        assert_eq!(verdict("Looks fine to me."), Verdict::Passed);
    }

    #[test]
    fn both_sentinels_fail() {
        assert_eq!(
            verdict("TEST_PASSED: mostly, but TEST_FAILED: one edge case"),
            Verdict::Failed
        );
    }
}
