use assert_cmd::Command;
use predicates::str::contains;
use rstest::{fixture, rstest};
use std::io::Write;
use tempfile::NamedTempFile;

const ARITHMETIC: &str = "1+1,2\n 2+2 , 4 \n3+3,6\n";

#[fixture]
fn dataset() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(ARITHMETIC.as_bytes()).unwrap();
    file
}

fn quiz(dataset: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("timequiz").unwrap();
    cmd.env_remove("QUIZ_CSV").env_remove("QUIZ_TIMER_SECONDS").arg("--csv").arg(dataset.path());
    cmd
}

#[rstest]
fn perfect_score(dataset: NamedTempFile) {
    quiz(&dataset)
        .args(["--timer-seconds", "100"])
        .write_stdin("\n2\n4\n6\n")
        .assert()
        .success()
        .stdout(contains("you will have 100 seconds"))
        .stdout(contains("Question 1:\t1+1?"))
        .stdout(contains("Question 3:\t3+3?"))
        .stdout(contains("Quiz Done! Here are the results"))
        .stdout(contains("You answered 3 questions correct out of 3"));
}

#[rstest]
fn one_wrong_answer(dataset: NamedTempFile) {
    quiz(&dataset)
        .args(["--timerSeconds", "100"])
        .write_stdin("\n2\n5\n6\n")
        .assert()
        .success()
        .stdout(contains("You answered 2 questions correct out of 3"));
}

#[rstest]
fn closed_stdin_counts_as_wrong(dataset: NamedTempFile) {
    quiz(&dataset)
        .args(["--timer-seconds", "100"])
        .write_stdin("\n2\n")
        .assert()
        .success()
        .stdout(contains("You answered 1 questions correct out of 3"));
}

#[rstest]
fn zero_timer_scores_nothing(dataset: NamedTempFile) {
    quiz(&dataset)
        .args(["--timer-seconds", "0"])
        .write_stdin("\n2\n4\n6\n")
        .assert()
        .success()
        .stdout(contains("Time's up!"))
        .stdout(contains("You answered 0 questions correct out of 3"));
}

#[rstest]
fn negative_timer_scores_nothing(dataset: NamedTempFile) {
    quiz(&dataset)
        .args(["--timer-seconds", "-5"])
        .write_stdin("\n2\n4\n6\n")
        .assert()
        .success()
        .stdout(contains("you will have 0 seconds"))
        .stdout(contains("You answered 0 questions correct out of 3"));
}

#[rstest]
fn largest_timer_is_accepted(dataset: NamedTempFile) {
    quiz(&dataset)
        .args(["--timer-seconds", "9223372036854775807"])
        .write_stdin("\n2\n4\n6\n")
        .assert()
        .success()
        .stdout(contains("you will have 9223372036854775807 seconds"))
        .stdout(contains("You answered 3 questions correct out of 3"));
}

#[rstest]
fn timer_from_environment(dataset: NamedTempFile) {
    quiz(&dataset)
        .env("QUIZ_TIMER_SECONDS", "42")
        .write_stdin("\n2\n4\n6\n")
        .assert()
        .success()
        .stdout(contains("you will have 42 seconds"));
}

#[test]
fn missing_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("timequiz")
        .unwrap()
        .env_remove("QUIZ_CSV")
        .arg("--csv")
        .arg(dir.path().join("missing.csv"))
        .write_stdin("\n")
        .assert()
        .code(1)
        .stderr(contains("cannot load quiz dataset"))
        .stderr(contains("Dataset file not found."));
}

#[test]
fn rejects_non_numeric_timer() {
    Command::cargo_bin("timequiz")
        .unwrap()
        .args(["--timer-seconds", "soon"])
        .assert()
        .failure()
        .stderr(contains("--timer-seconds"));
}
