//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::digit_runs;
pub use errors::UtilsError;
pub use validation::check_number_usage;
