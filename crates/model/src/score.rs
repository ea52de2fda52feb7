use core::fmt::{self, Display};

/// Outcome of a single quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Number of questions answered correctly. Never exceeds `total`.
    pub correct: usize,
    /// Number of questions in the dataset, including those never reached.
    pub total: usize,
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { correct, total } = self;
        write!(f, "You answered {correct} questions correct out of {total}")
    }
}
