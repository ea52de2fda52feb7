use core::fmt::{self, Display};
use std::io;

#[derive(Debug)]
pub enum Error {
    /// Writing a prompt to the console failed.
    Output,
    /// The operating system refused to start an answer thread.
    Spawn,
    /// The answer channel closed while a race was still pending.
    Dead,
}

impl From<io::Error> for Error {
    fn from(_: io::Error) -> Self {
        Self::Output
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Output => "Cannot write the quiz prompt to the console.",
            Self::Spawn => "Cannot start a thread for reading answers.",
            Self::Dead => "Oops! The answer channel closed unexpectedly. This is a bug.",
        })
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
