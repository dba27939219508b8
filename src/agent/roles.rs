//! Role instructions and prompt builders for the three agents.
//!
//! Each role carries its output-format contract, including the sentinel the
//! pipeline watches for. Builders assemble the per-phase prompts; the
//! artifacts are always embedded verbatim.

/// Display names used in the usage report.
pub const ANALYST_NAME: &str = "Requirements Analyst";
pub const CODER_NAME: &str = "Coder";
pub const TESTER_NAME: &str = "Tester";

/// System instruction for the requirements analyst.
pub const ANALYST_ROLE: &str = "\
You are a Requirements Analyst. Your aim is to gather information about the
user's software requirements and produce a Software Requirements
Specification (SRS).

Interview the user through structured questions, one question at a time,
offering options where possible. Always cover:
- Main purpose/objective
- Key features needed
- Performance requirements
- Constraints or limitations

If you are not sure you have enough information, keep asking one question at
a time. Once you have enough, stop asking and reply with a summary in
exactly this format:

SRS_DOCUMENT:
Purpose: [Main purpose]
Features: [List of key features]

The summary must begin with the SRS_DOCUMENT keyword in capital letters.";

/// System instruction for the coder.
pub const CODER_ROLE: &str = "\
You are a Software Developer. Write complete, runnable Python code from the
provided Software Requirements Specification (SRS), then improve it
according to the tester's feedback.

Rules:
- Code must be clean and well-documented, with docstrings and comments
- Follow PEP 8 style guidelines
- Include error handling where appropriate
- When given test feedback, always provide the complete updated code, not a diff

Your response must start with:
CODE_START
[Your complete code here]
CODE_END";

/// System instruction for the tester.
pub const TESTER_ROLE: &str = "\
You are a Software Tester. Review the given code against the original SRS
document: verify every requirement is implemented, check for bugs, validate
error handling, and consider edge cases.

Reply with exactly one of:

TEST_FAILED:
[List of specific issues and suggestions]

TEST_PASSED:
[What the code was checked against and a brief confirmation]";

/// Opening message from the analyst, shown before any model call.
pub const ANALYST_GREETING: &str = "\
Hello! I'm your Requirements Analyst. Let's discuss your software
requirements. What's the main purpose of the software you want to build?";

/// Prompt for one questioning round: the whole transcript so far.
pub fn questioning_prompt(transcript: &str) -> String {
    format!("Current conversation:\n{transcript}")
}

/// Final prompt once the interaction budget is spent: summarize the
/// transcript into the SRS format unconditionally.
pub fn forced_summary_prompt(transcript: &str) -> String {
    format!(
        "We've reached the maximum number of interactions. Generate an SRS \
         document from this conversation:\n{transcript}\n\n\
         Provide it in exactly this format:\n\n\
         SRS_DOCUMENT:\n\
         Purpose: [Main purpose]\n\
         Features: [List of key features]"
    )
}

/// Prompt for initial code generation.
pub fn generate_prompt(srs: &str) -> String {
    format!("Generate Python code based on this SRS:\n{srs}")
}

/// Prompt for a revision round.
pub fn revise_prompt(code: &str, feedback: &str, srs: &str) -> String {
    format!(
        "Revise this code based on the test feedback and original SRS.\n\n\
         Original SRS:\n{srs}\n\n\
         Original code:\n{code}\n\n\
         Test feedback:\n{feedback}\n\n\
         Provide the complete revised code."
    )
}

/// Prompt for a verification round.
pub fn test_prompt(code: &str, srs: &str) -> String {
    format!(
        "Test this code against the SRS requirements.\n\n\
         SRS:\n{srs}\n\n\
         Code to test:\n{code}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::classify;

    #[test]
    fn roles_name_their_sentinels() {
        assert!(ANALYST_ROLE.contains(classify::SRS_SENTINEL));
        assert!(CODER_ROLE.contains(classify::CODE_START));
        assert!(CODER_ROLE.contains(classify::CODE_END));
        assert!(TESTER_ROLE.contains(classify::TEST_FAILED_SENTINEL));
        assert!(TESTER_ROLE.contains(classify::TEST_PASSED_SENTINEL));
    }

    #[test]
    fn questioning_prompt_embeds_transcript() {
        let p = questioning_prompt("RA: hi\nUser: a calculator");
        assert!(p.contains("User: a calculator"));
    }

    #[test]
    fn forced_summary_prompt_demands_format() {
        let p = forced_summary_prompt("RA: hi");
        assert!(p.contains(classify::SRS_SENTINEL));
        assert!(p.contains("maximum number of interactions"));
    }

    #[test]
    fn revise_prompt_embeds_all_three_inputs() {
        let p = revise_prompt("print('x')", "TEST_FAILED: no tests", "SRS_DOCUMENT: calc");
        assert!(p.contains("print('x')"));
        assert!(p.contains("TEST_FAILED: no tests"));
        assert!(p.contains("SRS_DOCUMENT: calc"));
    }

    #[test]
    fn test_prompt_embeds_code_and_srs() {
        let p = test_prompt("code body", "srs body");
        assert!(p.contains("code body"));
        assert!(p.contains("srs body"));
    }
}
