use core::fmt::{self, Display};
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The dataset file does not exist.
    NotFound,
    /// The dataset exists but could not be read.
    Unreadable(io::ErrorKind),
    /// A row (at the given line, if known) is not a question/answer pair.
    Malformed(Option<u64>),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            kind => Self::Unreadable(kind),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        use csv::ErrorKind;
        let line = err.position().map(csv::Position::line);
        match err.into_kind() {
            ErrorKind::Io(err) => err.into(),
            ErrorKind::Utf8 { .. } | ErrorKind::UnequalLengths { .. } | ErrorKind::Deserialize { .. } => {
                Self::Malformed(line)
            }
            _ => Self::Malformed(None),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("Dataset file not found."),
            Self::Unreadable(kind) => write!(f, "Cannot read the dataset file: {kind}."),
            Self::Malformed(Some(line)) => write!(f, "Line {line} is not a question/answer pair."),
            Self::Malformed(None) => f.write_str("Dataset contains a malformed record."),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
