pub mod error;
mod input;

pub use input::{InputReader, LineReader, StdinReader};

use error::{Error, Result};
use model::{Problem, Score};
use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};
use tokio::{
    sync::mpsc,
    time::{self, Instant},
};

type Channel = mpsc::Sender<bool>;

/// Converts a user-supplied number of seconds into a countdown budget. Zero and
/// negative values leave no time at all.
pub fn budget(seconds: i64) -> Duration {
    u64::try_from(seconds).map_or(Duration::ZERO, Duration::from_secs)
}

pub struct Session<R> {
    /// Shared with whichever answer thread is currently blocked on input.
    reader: Arc<Mutex<R>>,
}

impl<R: InputReader> Session<R> {
    pub fn new(reader: R) -> Self {
        Self { reader: Arc::new(Mutex::new(reader)) }
    }

    /// Presents every problem in order until either the problems run out or the
    /// `budget` elapses. The countdown starts immediately and is shared by all
    /// questions. An answer still being typed when it fires is never scored.
    ///
    /// The session is consumed: a thread abandoned at expiry keeps the reader,
    /// so it must not serve another run.
    pub async fn run<W: Write>(self, out: &mut W, problems: &[Problem], budget: Duration) -> Result<Score> {
        let total = problems.len();
        let mut correct = 0;
        log::info!("Starting a session of {total} questions with a budget of {budget:?}.");

        // At most one answer thread reports at a time, so one slot suffices.
        let (tx, mut rx) = mpsc::channel(1);
        // Budgets too large for an `Instant` never expire.
        let deadline = Instant::now().checked_add(budget);
        let timer = time::sleep(budget);
        tokio::pin!(timer);

        for (index, problem) in problems.iter().enumerate() {
            let number = index + 1;
            write!(out, "Question {number}:\t{}?\nAnswer:", problem.question)?;
            out.flush()?;
            self.spawn_answer(number, problem.clone(), tx.clone())?;

            let answered = tokio::select! {
                biased;
                _ = &mut timer => None,
                Some(verdict) = rx.recv() => Some(verdict),
                else => return Err(Error::Dead),
            };

            // Timers fire at millisecond granularity, so a verdict may still
            // slip in just past the deadline.
            let Some(verdict) = answered.filter(|_| deadline.map_or(true, |deadline| Instant::now() < deadline)) else {
                writeln!(out, "\n\nTime's up!\n")?;
                log::warn!("Countdown expired on question {number} of {total}.");
                return Ok(Score { correct, total });
            };

            log::debug!("Question {number} was answered {}.", if verdict { "correctly" } else { "incorrectly" });
            correct += usize::from(verdict);
        }

        log::info!("Session finished with {correct} of {total} correct.");
        Ok(Score { correct, total })
    }

    /// Detaches a thread that blocks on the reader and reports whether the line
    /// it got matches `problem`. Read failures count as wrong answers.
    fn spawn_answer(&self, number: usize, problem: Problem, tx: Channel) -> Result<()> {
        let reader = Arc::clone(&self.reader);
        thread::Builder::new()
            .name(String::from("answer-reader"))
            .spawn(move || {
                let verdict = match read_answer(&reader) {
                    Ok(line) => problem.is_correct(&line),
                    Err(err) => {
                        log::error!("Cannot read the answer to question {number}: {err}");
                        false
                    }
                };

                // The receiver is gone once the countdown has ended the session.
                if tx.blocking_send(verdict).is_err() {
                    log::debug!("Discarded late answer to question {number}.");
                }
            })
            .map_err(|_| Error::Spawn)?;
        Ok(())
    }
}

fn read_answer<R: InputReader>(reader: &Mutex<R>) -> io::Result<String> {
    let mut guard = reader
        .lock()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "input reader was poisoned"))?;
    guard.read_line()
}
