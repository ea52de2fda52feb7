use alloc::{boxed::Box, string::String};
use serde::Deserialize;

/// A dataset row exactly as it appears on disk. Column order matters since
/// datasets carry no header row.
#[derive(Deserialize)]
pub struct RawProblem {
    /// Question text, possibly padded with whitespace.
    pub question: String,
    /// Expected answer, possibly padded with whitespace.
    pub answer: String,
}

/// A single question paired with its expected answer. Both fields are trimmed
/// upon construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Question to be displayed in the terminal.
    pub question: Box<str>,
    /// Exact (case-sensitive) text that counts as a correct answer.
    pub answer: Box<str>,
}

impl Problem {
    pub fn new(question: &str, answer: &str) -> Self {
        Self { question: question.trim().into(), answer: answer.trim().into() }
    }

    /// Checks a submitted line against the expected answer. Surrounding
    /// whitespace (including the trailing newline) is ignored.
    pub fn is_correct(&self, submitted: &str) -> bool {
        submitted.trim() == &*self.answer
    }
}

impl From<RawProblem> for Problem {
    fn from(RawProblem { question, answer }: RawProblem) -> Self {
        Self::new(&question, &answer)
    }
}
