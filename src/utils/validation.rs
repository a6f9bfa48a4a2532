use log::{debug, warn};

use crate::cards::Hand;
use crate::utils::digits::digit_runs;
use crate::utils::errors::UtilsError;

/// Check that the numbers written in `expression` are exactly the hand's values.
///
/// Both sides are compared as multisets. The numbers come from [`digit_runs`], so
/// the check is deliberately coarse: digits after a decimal point count as their
/// own numbers and operators are not looked at. A hand of `[2, 5, 3, 4]` therefore
/// passes `"2.5*3*4"`. This acceptance is intentional and must be kept.
///
/// # Errors
///
/// Returns [`UtilsError::WrongNumbers`] carrying the hand's values when the
/// multisets differ, including when there are more or fewer than four numbers.
pub fn check_number_usage(hand: &Hand, expression: &str) -> Result<(), UtilsError> {
    let mut found = digit_runs(expression);
    found.sort_unstable();

    let mut expected: Vec<u64> = hand.values().iter().map(|&v| u64::from(v)).collect();
    expected.sort_unstable();

    if found != expected {
        warn!(
            "Expression '{}' uses {:?}, hand is {}",
            expression, found, hand
        );
        return Err(UtilsError::WrongNumbers {
            expected: hand.values().to_vec(),
            found,
        });
    }

    debug!("Number usage matches hand {}", hand);
    Ok(())
}
