//! Conversation buffer for the requirements interview.
//!
//! Append-only, scoped to a single run, discarded once the phase produces
//! its artifact. Rendered wholesale into each analyst prompt.

use std::fmt;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Analyst,
    User,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Analyst => write!(f, "RA"),
            Speaker::User => write!(f, "User"),
        }
    }
}

/// One turn in the interview.
#[derive(Debug, Clone)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered, append-only transcript.
#[derive(Debug, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.turns.push(Turn {
            speaker,
            text: text.into(),
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Serialize the whole transcript, one `Speaker: text` line per turn.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.speaker, t.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_tags_speakers_in_order() {
        let mut convo = Conversation::new();
        convo.push(Speaker::Analyst, "What should it do?");
        convo.push(Speaker::User, "Track my reading list");

        assert_eq!(
            convo.render(),
            "RA: What should it do?\nUser: Track my reading list"
        );
    }

    #[test]
    fn empty_renders_empty() {
        let convo = Conversation::new();
        assert!(convo.is_empty());
        assert_eq!(convo.render(), "");
    }

    #[test]
    fn turns_are_appended_in_order() {
        let mut convo = Conversation::new();
        convo.push(Speaker::User, "first");
        convo.push(Speaker::Analyst, "second");
        convo.push(Speaker::User, "third");

        assert_eq!(convo.len(), 3);
        assert_eq!(convo.turns()[0].speaker, Speaker::User);
        assert_eq!(convo.turns()[2].text, "third");
    }
}
