pub mod error;

use model::{Problem, RawProblem};
use std::{fs::File, io, path::Path};

/// Opens the dataset at `path` and parses every row into a [`Problem`].
pub fn load(path: &Path) -> error::Result<Vec<Problem>> {
    let file = File::open(path)?;
    let problems = from_reader(file)?;
    log::info!("Loaded {} questions from {}.", problems.len(), path.display());
    Ok(problems)
}

/// Parses a header-less CSV source where column 0 holds the question and column 1
/// holds the expected answer. Row order is preserved.
pub fn from_reader<R: io::Read>(source: R) -> error::Result<Vec<Problem>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(source);
    let problems = reader
        .deserialize::<RawProblem>()
        .map(|row| -> error::Result<Problem> { Ok(row?.into()) })
        .collect();
    problems
}
