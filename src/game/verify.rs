use log::{debug, warn};

use crate::cards::Hand;
use crate::config::GameConfig;
use crate::expression::evaluate;
use crate::game::outcome::VerificationOutcome;
use crate::solver::{Hint, HintSolver};
use crate::utils::{UtilsError, check_number_usage};

/// Check a typed answer against the hand using the default target and tolerance.
pub fn verify(hand: &Hand, expression: &str) -> VerificationOutcome {
    verify_with(hand, expression, &GameConfig::default())
}

/// Check a typed answer against the hand.
///
/// Blank means ASCII whitespace or control characters only; other Unicode
/// spaces count as text and fail a later check.
///
/// The checks run in a fixed order and stop at the first failure: blank input,
/// number usage, syntax, finiteness, then the tolerant comparison with the target.
pub fn verify_with(hand: &Hand, expression: &str, config: &GameConfig) -> VerificationOutcome {
    debug!("Verifying '{}' against hand {}", expression, hand);

    if expression
        .chars()
        .all(|c| c.is_ascii_whitespace() || c.is_ascii_control())
    {
        warn!("Empty expression submitted");
        return VerificationOutcome::EmptyInput;
    }

    if let Err(UtilsError::WrongNumbers { expected, .. }) = check_number_usage(hand, expression) {
        return VerificationOutcome::WrongNumbers { expected };
    }

    let value = match evaluate(expression) {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejecting '{}': {}", expression, e);
            return VerificationOutcome::SyntaxInvalid(e);
        }
    };

    if !value.is_finite() {
        warn!("Expression '{}' evaluated to {}", expression, value);
        return VerificationOutcome::NonFiniteResult(value);
    }

    let matches_target = config.matches_target(value);
    debug!(
        "Expression '{}' evaluated to {} (target {}, match: {})",
        expression, value, config.target, matches_target
    );
    VerificationOutcome::NumericResult {
        value,
        target: config.target,
        matches_target,
    }
}

/// Compute a hint for the hand. Not cached: every call searches again.
pub fn hint(hand: &Hand) -> Hint {
    Hint::from(HintSolver::new().solve(hand))
}
