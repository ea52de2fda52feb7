#![no_std]
extern crate alloc;

pub mod quiz;
pub mod score;

pub use quiz::{Problem, RawProblem};
pub use score::Score;
