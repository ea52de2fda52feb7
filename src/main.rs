use anyhow::Context;
use clap::Parser;
use model::Score;
use session::{InputReader, Session, StdinReader};
use std::{io, path::PathBuf};
use tokio::runtime::Runtime;

const DIVIDER: &str = "----------------------------------------";

/// Timed command-line quiz.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Quiz dataset in CSV format: one `question,answer` pair per row.
    #[arg(long, env = "QUIZ_CSV", default_value = "problems.csv")]
    csv: PathBuf,

    /// Seconds allotted for the whole quiz.
    #[arg(
        long = "timer-seconds",
        visible_alias = "timerSeconds",
        env = "QUIZ_TIMER_SECONDS",
        default_value_t = 20,
        allow_negative_numbers = true
    )]
    timer_seconds: i64,
}

fn print_report(score: Score) {
    println!("{DIVIDER}");
    println!("Quiz Done! Here are the results");
    println!("{score}");
    println!("{DIVIDER}");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let Args { csv, timer_seconds } = Args::parse();

    // Load the entire dataset before any interaction
    let problems = dataset::load(&csv).with_context(|| format!("cannot load quiz dataset {}", csv.display()))?;

    // Give the user a chance to get ready
    let budget = session::budget(timer_seconds);
    println!("All ready for the quiz, you will have {} seconds to answer all questions!", budget.as_secs());
    println!("Press 'Enter' to start the quiz!");
    let mut reader = StdinReader::default();
    if let Err(err) = reader.read_line() {
        log::warn!("No start signal received: {err}");
    }

    // The countdown starts only once the session is running
    let runtime = Runtime::new()?;
    let quiz = Session::new(reader);
    let score = runtime.block_on(quiz.run(&mut io::stdout(), &problems, budget))?;
    print_report(score);
    Ok(())
}
