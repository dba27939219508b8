//! Console collaborators — user input and progress reporting.
//!
//! Both are trait seams so the pipeline can run against a real terminal or
//! against scripted stand-ins in tests. Progress output is one-way and must
//! never block the pipeline.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Blocking read of one line of free-form text from the operator.
pub trait UserInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// One-way text sink for phase transitions, intermediate artifacts, and the
/// final usage report.
pub trait Progress {
    fn emit(&self, line: &str);
}

/// Reads from stdin, echoing the prompt to stdout first.
pub struct StdinInput;

impl UserInput for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut out = io::stdout().lock();
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prints progress lines to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Plays back a fixed list of operator replies, for scripted runs and tests.
pub struct ScriptedInput {
    replies: VecDeque<String>,
    reads: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// How many reads the pipeline has performed.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl UserInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.reads += 1;
        self.replies.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }
}

/// Discards all progress output.
pub struct NullProgress;

impl Progress for NullProgress {
    fn emit(&self, _line: &str) {}
}
