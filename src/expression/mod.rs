//! Arithmetic expressions over `+ - * /`, parentheses and nonnegative decimals

mod errors;
mod operator;
mod parser;

pub use errors::ExpressionError;
pub use operator::Operator;
pub use parser::{MAX_NESTING, evaluate};

#[cfg(test)]
mod tests;
