mod candidate;
mod core;
mod hint;

pub use candidate::{Candidate, Shape};
pub use core::HintSolver;
pub use hint::Hint;
