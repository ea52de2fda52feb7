use std::io::{self, BufRead};

/// Blocking source of user-submitted lines.
///
/// Reads never time out. A reader that loses the race against the countdown is
/// simply abandoned on its thread until the process exits.
pub trait InputReader: Send + 'static {
    /// Blocks until one full line is available. The line may still carry its
    /// trailing newline. End of input is reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self) -> io::Result<String>;
}

fn next_line(read: impl FnOnce(&mut String) -> io::Result<usize>) -> io::Result<String> {
    let mut line = String::new();
    match read(&mut line)? {
        0 => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed")),
        _ => Ok(line),
    }
}

/// Reads from the process-wide standard input buffer, so lines consumed before
/// the session starts never swallow buffered answers.
pub struct StdinReader(io::Stdin);

impl Default for StdinReader {
    fn default() -> Self {
        Self(io::stdin())
    }
}

impl InputReader for StdinReader {
    fn read_line(&mut self) -> io::Result<String> {
        next_line(|buf| self.0.read_line(buf))
    }
}

/// Adapts any owned buffered source (files, pipes, in-memory buffers).
pub struct LineReader<B>(pub B);

impl<B> InputReader for LineReader<B>
where
    B: BufRead + Send + 'static,
{
    fn read_line(&mut self) -> io::Result<String> {
        next_line(|buf| self.0.read_line(buf))
    }
}
