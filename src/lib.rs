//! Twentyfour - a library for the "make 24" card puzzle
//!
//! Four cards are dealt and the player writes an arithmetic expression that
//! uses each card value exactly once and evaluates to 24. This crate checks
//! such answers and searches for hints.

pub mod cards;
pub mod config;
pub mod expression;
pub mod game;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use cards::{Card, CardError, DealtHand, Deck, Hand, Rank, Suit};
pub use config::{GameConfig, TARGET, TOLERANCE};
pub use expression::{ExpressionError, Operator, evaluate};
pub use game::{GameSession, VerificationOutcome, hint, verify, verify_with};
pub use solver::{Hint, HintSolver};
pub use utils::{UtilsError, check_number_usage, digit_runs};

/// Check a typed answer for a hand given as raw values
///
/// This is a convenience function that validates the values and then runs
/// [`verify`].
///
/// # Arguments
///
/// * `values` - Four card values, each between 1 and 13
/// * `expression` - The player's expression
///
/// # Errors
///
/// This function will return an error if any value is outside 1..=13.
/// Problems with the expression itself are reported in the outcome, never as errors.
///
/// # Examples
///
/// ```
/// use twentyfour::verify_values;
///
/// match verify_values([6, 6, 6, 6], "6*6-6-6") {
///     Ok(outcome) => println!("{}: {}", outcome.title(), outcome.message()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn verify_values(values: [u8; 4], expression: &str) -> Result<VerificationOutcome, CardError> {
    let hand = Hand::new(values)?;
    Ok(verify(&hand, expression))
}

/// Find a hint for a hand given as raw values
///
/// # Errors
///
/// This function will return an error if any value is outside 1..=13.
///
/// # Examples
///
/// ```
/// use twentyfour::{Hint, hint_values};
///
/// match hint_values([4, 6, 2, 8]) {
///     Ok(Hint::Found(expr)) => println!("Try: {}", expr),
///     Ok(Hint::NoSolution) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn hint_values(values: [u8; 4]) -> Result<Hint, CardError> {
    let hand = Hand::new(values)?;
    Ok(hint(&hand))
}
